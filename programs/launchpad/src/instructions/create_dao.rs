use anchor_lang::prelude::*;
use anchor_spl::token::{self, spl_token::instruction::AuthorityType, Mint, SetAuthority, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

// Create DAO Instruction
//
// Registers a new token fundraise:
// - mint PDA ["mint", name], its own authority until the supply is minted
// - FundDataStore, Commitments and Users records for the mint
// - an entry in the launchpad-wide token list
// - escrow SOL PDA (funded to rent exemption) and escrow token account
// The full supply (sale + reserve seed) is minted into escrow and the
// mint authority is revoked, so the supply is fixed from here on.

#[derive(Accounts)]
#[instruction(name: String, decimals: u8)]
pub struct CreateDao<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        seeds = [CREATORS],
        bump = creators.bump,
    )]
    pub creators: Box<Account<'info, Creators>>,

    #[account(
        mut,
        seeds = [DAO_LIST],
        bump = dao_list.bump,
    )]
    pub dao_list: Box<Account<'info, DaoList>>,

    #[account(
        init,
        payer = creator,
        seeds = [MINT, name.as_bytes()],
        bump,
        mint::decimals = decimals,
        mint::authority = mint,
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + FundDataStore::INIT_SPACE,
        seeds = [FUND_DATA, mint.key().as_ref()],
        bump,
    )]
    pub fund_data_store: Box<Account<'info, FundDataStore>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Commitments::INIT_SPACE,
        seeds = [COMMITMENT, mint.key().as_ref()],
        bump,
    )]
    pub commitments: Box<Account<'info, Commitments>>,

    #[account(
        init,
        payer = creator,
        space = ANCHOR_DISCRIMINATOR + Users::INIT_SPACE,
        seeds = [USERS, mint.key().as_ref()],
        bump,
    )]
    pub users: Box<Account<'info, Users>>,

    // Holds committed lamports; system owned so it can sign transfers out
    #[account(
        mut,
        seeds = [ESCROW, SOL, mint.key().as_ref()],
        bump,
    )]
    pub escrow_sol: SystemAccount<'info>,

    #[account(
        init,
        payer = creator,
        seeds = [ESCROW, MINT, mint.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = fund_data_store,
    )]
    pub escrow_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateDao<'info> {
    pub fn create_dao(
        &mut self,
        name: String,
        fundraising_goal: u64,
        sale_amount: u64,
        vesting_percent: VestingPercent,
        bumps: &CreateDaoBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Registered, unblocked creator; the creator's fee applies to this token
        let fee_percent = self.creators.ensure_active(&self.creator.key())?;

        // 2. Name doubles as the mint seed
        require!(
            !name.is_empty() && name.len() <= MAX_NAME_LEN,
            LaunchpadError::InvalidName
        );

        // 3. Economic parameters are validated by the store
        let now = Clock::get()?.unix_timestamp;
        let mint_key = self.mint.key();
        self.fund_data_store.initialize(
            mint_key,
            self.creator.key(),
            fundraising_goal,
            sale_amount,
            vesting_percent,
            fee_percent,
            now,
            bumps.fund_data_store,
        )?;
        self.commitments.bootstrap(mint_key, bumps.commitments);
        self.users.bootstrap(mint_key, bumps.users);
        self.dao_list.add(mint_key)?;

        self.fund_escrow()?;

        let supply = self.fund_data_store.total_supply()?;
        self.mint_supply(&name, supply, bumps.mint)?;

        msg!(
            "DAO created: {} goal {} lamports, {} tokens per lamport",
            name,
            fundraising_goal,
            self.fund_data_store.tokens_per_sol
        );
        emit!(DaoCreated {
            mint: mint_key,
            creator: self.creator.key(),
            name,
            fundraising_goal,
            tokens_per_sol: self.fund_data_store.tokens_per_sol,
            supply,
        });

        Ok(())
    }

    // Escrow PDA is kept rent exempt; only committed SOL ever leaves it
    fn fund_escrow(&self) -> Result<()> {
        let rent_minimum = Rent::get()?.minimum_balance(0);
        let missing = rent_minimum.saturating_sub(self.escrow_sol.lamports());

        transfer_sol(
            missing,
            &self.system_program.to_account_info(),
            &self.creator.to_account_info(),
            &self.escrow_sol.to_account_info(),
        )
    }

    fn mint_supply(&self, name: &str, supply: u64, mint_bump: u8) -> Result<()> {
        let mint_seeds: &[&[u8]] = &[MINT, name.as_bytes(), &[mint_bump]];

        mint_tokens(
            supply,
            &self.token_program.to_account_info(),
            &self.mint.to_account_info(),
            &self.escrow_token.to_account_info(),
            &self.mint.to_account_info(),
            mint_seeds,
        )?;

        // Revoke minting so the supply is fixed
        token::set_authority(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                SetAuthority {
                    current_authority: self.mint.to_account_info(),
                    account_or_mint: self.mint.to_account_info(),
                },
                &[mint_seeds],
            ),
            AuthorityType::MintTokens,
            None,
        )
    }
}
