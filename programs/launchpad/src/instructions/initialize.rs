use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

// Initialize Instruction
//
// Creates the singleton accounts: role registry, proposal registry,
// creator registry, blacklist and token list. The signer becomes owner and first admin.
// A second call fails at `init` because the PDAs already exist.

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + GlobalConfig::INIT_SPACE,
        seeds = [GLOBAL_CONFIG],
        bump,
    )]
    pub global_config: Box<Account<'info, GlobalConfig>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + ProposalRegistry::INIT_SPACE,
        seeds = [PROPOSAL_REGISTRY],
        bump,
    )]
    pub proposal_registry: Box<Account<'info, ProposalRegistry>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Creators::INIT_SPACE,
        seeds = [CREATORS],
        bump,
    )]
    pub creators: Box<Account<'info, Creators>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + Blacklist::INIT_SPACE,
        seeds = [BLACKLIST],
        bump,
    )]
    pub blacklist: Box<Account<'info, Blacklist>>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + DaoList::INIT_SPACE,
        seeds = [DAO_LIST],
        bump,
    )]
    pub dao_list: Box<Account<'info, DaoList>>,

    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        fees_collection_account: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        let owner = self.owner.key();

        self.global_config
            .bootstrap(owner, fees_collection_account, bumps.global_config);
        self.proposal_registry.bootstrap(bumps.proposal_registry);

        self.creators.creators = Vec::new();
        self.creators.bump = bumps.creators;

        self.blacklist.users = Vec::new();
        self.blacklist.bump = bumps.blacklist;

        self.dao_list.mints = Vec::new();
        self.dao_list.bump = bumps.dao_list;

        msg!("Launchpad initialized, owner: {}", owner);
        emit!(Initialized {
            owner,
            fees_collection_account,
        });

        Ok(())
    }
}
