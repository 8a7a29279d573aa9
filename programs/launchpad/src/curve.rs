// Constant-product pricing (x * y = k) for the SOL/token reserve pair.
//
// x is the SOL reserve, y the token reserve. The remaining reserve on the
// output side is rounded up, so k after a trade is never below k before it.
// Buy fees are skimmed from the SOL paid in; sell fees from the SOL paid out.
// Both the estimate view and the mutating trades call these functions.

use anchor_lang::prelude::*;

use crate::{errors::*, helpers::*};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum TradeDirection {
    // SOL in, tokens out
    Buy,
    // Tokens in, SOL out
    Sell,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BuyQuote {
    pub fee: u64,
    pub net_sol_in: u64,
    pub tokens_out: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SellQuote {
    // SOL leaving the reserve, fee included
    pub gross_sol_out: u64,
    pub fee: u64,
    pub sol_out: u64,
}

pub fn quote_buy(
    sol_reserve: u64,
    token_reserve: u64,
    fee_percent: u32,
    sol_in: u64,
) -> Result<BuyQuote> {
    require!(sol_in > 0, LaunchpadError::AmountCantBeZero);
    require!(
        sol_reserve > 0 && token_reserve > 0,
        LaunchpadError::InsufficientLiquidity
    );

    let fee = calc_amount(sol_in, fee_percent as u64)?;
    let net_sol_in = sol_in.checked_sub(fee).ok_or(LaunchpadError::Underflow)?;

    let k = (sol_reserve as u128)
        .checked_mul(token_reserve as u128)
        .ok_or(LaunchpadError::Overflow)?;
    let new_sol_reserve = (sol_reserve as u128)
        .checked_add(net_sol_in as u128)
        .ok_or(LaunchpadError::Overflow)?;
    let new_token_reserve = ceil_div(k, new_sol_reserve)?;

    let tokens_out = (token_reserve as u128)
        .checked_sub(new_token_reserve)
        .ok_or(LaunchpadError::Underflow)? as u64;
    require!(tokens_out > 0, LaunchpadError::ZeroOutput);
    require!(tokens_out < token_reserve, LaunchpadError::InsufficientLiquidity);

    Ok(BuyQuote {
        fee,
        net_sol_in,
        tokens_out,
    })
}

pub fn quote_sell(
    sol_reserve: u64,
    token_reserve: u64,
    fee_percent: u32,
    tokens_in: u64,
) -> Result<SellQuote> {
    require!(tokens_in > 0, LaunchpadError::AmountCantBeZero);
    require!(
        sol_reserve > 0 && token_reserve > 0,
        LaunchpadError::InsufficientLiquidity
    );

    let k = (sol_reserve as u128)
        .checked_mul(token_reserve as u128)
        .ok_or(LaunchpadError::Overflow)?;
    let new_token_reserve = (token_reserve as u128)
        .checked_add(tokens_in as u128)
        .ok_or(LaunchpadError::Overflow)?;
    let new_sol_reserve = ceil_div(k, new_token_reserve)?;

    let gross_sol_out = (sol_reserve as u128)
        .checked_sub(new_sol_reserve)
        .ok_or(LaunchpadError::Underflow)? as u64;
    require!(gross_sol_out < sol_reserve, LaunchpadError::InsufficientLiquidity);

    let fee = calc_amount(gross_sol_out, fee_percent as u64)?;
    let sol_out = gross_sol_out
        .checked_sub(fee)
        .ok_or(LaunchpadError::Underflow)?;
    require!(sol_out > 0, LaunchpadError::ZeroOutput);

    Ok(SellQuote {
        gross_sol_out,
        fee,
        sol_out,
    })
}

// Output amount for `amount_in` in the given direction, with no state change
pub fn estimate(
    sol_reserve: u64,
    token_reserve: u64,
    fee_percent: u32,
    amount_in: u64,
    direction: TradeDirection,
) -> Result<u64> {
    match direction {
        TradeDirection::Buy => {
            quote_buy(sol_reserve, token_reserve, fee_percent, amount_in).map(|q| q.tokens_out)
        }
        TradeDirection::Sell => {
            quote_sell(sol_reserve, token_reserve, fee_percent, amount_in).map(|q| q.sol_out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FEE_SCALE;

    const FIVE_PERCENT: u32 = 5_000_000;

    fn product(x: u64, y: u64) -> u128 {
        x as u128 * y as u128
    }

    #[test]
    fn buy_without_fee_matches_textbook_formula() {
        let quote = quote_buy(1_000, 1_000_000, 0, 100).unwrap();
        // floor(100 * 1_000_000 / 1_100)
        assert_eq!(quote.tokens_out, 90_909);
        assert_eq!(quote.fee, 0);
        assert_eq!(quote.net_sol_in, 100);
    }

    #[test]
    fn buy_fee_is_taken_from_sol_in() {
        let quote = quote_buy(10_000_000, 50_000_000, FIVE_PERCENT, 1_000_000).unwrap();
        assert_eq!(quote.fee, 50_000);
        assert_eq!(quote.net_sol_in, 950_000);
        assert_eq!(quote.tokens_out, 950_000 * 50_000_000 / 10_950_000);
    }

    #[test]
    fn sell_fee_is_taken_from_sol_out() {
        let quote = quote_sell(10_000_000, 50_000_000, FIVE_PERCENT, 5_000_000).unwrap();
        let gross = 5_000_000u64 * 10_000_000 / 55_000_000;
        assert_eq!(quote.gross_sol_out, gross);
        assert_eq!(quote.fee, gross * FIVE_PERCENT as u64 / FEE_SCALE);
        assert_eq!(quote.sol_out, quote.gross_sol_out - quote.fee);
    }

    #[test]
    fn product_never_decreases_over_a_trade_sequence() {
        let (mut x, mut y) = (3_333_333u64, 777_777_777u64);
        let trades: [(TradeDirection, u64); 8] = [
            (TradeDirection::Buy, 1_234_567),
            (TradeDirection::Sell, 98_765_432),
            (TradeDirection::Buy, 7),
            (TradeDirection::Sell, 13_000),
            (TradeDirection::Buy, 999_999),
            (TradeDirection::Sell, 1_000_001),
            (TradeDirection::Buy, 42_424_242),
            (TradeDirection::Sell, 300_000_000),
        ];

        for (direction, amount) in trades {
            let before = product(x, y);
            match direction {
                TradeDirection::Buy => {
                    let q = quote_buy(x, y, FIVE_PERCENT, amount).unwrap();
                    x += q.net_sol_in;
                    y -= q.tokens_out;
                }
                TradeDirection::Sell => {
                    let q = quote_sell(x, y, FIVE_PERCENT, amount).unwrap();
                    x -= q.gross_sol_out;
                    y += amount;
                }
            }
            assert!(product(x, y) >= before, "k shrank on {:?} {}", direction, amount);
        }
    }

    #[test]
    fn estimate_equals_execution_quote() {
        let estimated = estimate(5_000, 9_000_000, FIVE_PERCENT, 700, TradeDirection::Buy).unwrap();
        let executed = quote_buy(5_000, 9_000_000, FIVE_PERCENT, 700).unwrap();
        assert_eq!(estimated, executed.tokens_out);

        let estimated =
            estimate(5_000, 9_000_000, FIVE_PERCENT, 800_000, TradeDirection::Sell).unwrap();
        let executed = quote_sell(5_000, 9_000_000, FIVE_PERCENT, 800_000).unwrap();
        assert_eq!(estimated, executed.sol_out);
    }

    #[test]
    fn dust_trades_are_rejected() {
        let err = quote_buy(1_000_000, 10, 0, 1).unwrap_err();
        assert_eq!(err, LaunchpadError::ZeroOutput.into());

        let err = quote_sell(10, 1_000_000, 0, 1).unwrap_err();
        assert_eq!(err, LaunchpadError::ZeroOutput.into());
    }

    #[test]
    fn empty_reserve_is_rejected() {
        let err = quote_buy(0, 100, 0, 10).unwrap_err();
        assert_eq!(err, LaunchpadError::InsufficientLiquidity.into());

        let err = quote_sell(100, 0, 0, 10).unwrap_err();
        assert_eq!(err, LaunchpadError::InsufficientLiquidity.into());
    }

    #[test]
    fn zero_input_is_rejected() {
        let err = estimate(100, 100, 0, 0, TradeDirection::Buy).unwrap_err();
        assert_eq!(err, LaunchpadError::AmountCantBeZero.into());
    }
}
