//! Linear vesting curve with a cliff gate.
//!
//! - before `cliff_ts`: nothing has vested, regardless of elapsed time
//! - at/after `end_ts`: the full allotment has vested (short-circuit, no division)
//! - in between: `total_allotment * (now - start_ts) / (end_ts - start_ts)`,
//!   multiply-then-divide in u128 with floor truncation
//!
//! All functions are pure and deterministic; identical inputs always yield
//! identical results.

use crate::error::EscrowError;
use crate::state::VestingSchedule;

/// Check schedule parameters before any account is written.
///
/// Requires `start_ts <= cliff_ts <= end_ts`, `start_ts < end_ts` (a
/// zero-length schedule would make the linear branch divide by zero) and a
/// non-zero allotment.
pub fn validate_schedule(
    start_ts: i64,
    cliff_ts: i64,
    end_ts: i64,
    total_allotment: u64,
) -> Result<(), EscrowError> {
    if start_ts > cliff_ts || cliff_ts > end_ts {
        return Err(EscrowError::InvalidSchedule);
    }
    if start_ts == end_ts {
        return Err(EscrowError::InvalidSchedule);
    }
    if total_allotment == 0 {
        return Err(EscrowError::InvalidSchedule);
    }
    Ok(())
}

/// Tokens vested as of `now`, ignoring anything already withdrawn.
///
/// The cliff only gates eligibility strictly before it: at `now == cliff_ts`
/// the linear value at that instant applies. At `now == end_ts` the result is
/// exactly `total_allotment` despite any truncation in the linear branch.
pub fn vested_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, EscrowError> {
    if now < schedule.cliff_ts {
        return Ok(0);
    }
    if now >= schedule.end_ts {
        return Ok(schedule.total_allotment);
    }

    // cliff_ts <= now < end_ts, and start_ts <= cliff_ts by invariant, so both
    // differences are non-negative and the span is non-zero.
    let elapsed = now
        .checked_sub(schedule.start_ts)
        .ok_or(EscrowError::MathOverflow)?;
    let span = schedule
        .end_ts
        .checked_sub(schedule.start_ts)
        .ok_or(EscrowError::MathOverflow)?;
    if span <= 0 || elapsed < 0 {
        return Err(EscrowError::InvalidSchedule);
    }

    let vested = (schedule.total_allotment as u128)
        .checked_mul(elapsed as u128)
        .ok_or(EscrowError::MathOverflow)?
        / span as u128;
    u64::try_from(vested).map_err(|_| EscrowError::MathOverflow)
}

/// Amount currently authorized for withdrawal: vested-to-date minus
/// `total_withdrawn`.
///
/// A zero (or would-be negative) result is `NothingToClaim`, never a zero
/// success, so a no-op transfer can never reach the token program.
pub fn claimable_amount(schedule: &VestingSchedule, now: i64) -> Result<u64, EscrowError> {
    let vested = vested_amount(schedule, now)?;
    let claimable = vested.saturating_sub(schedule.total_withdrawn);
    if claimable == 0 {
        return Err(EscrowError::NothingToClaim);
    }
    Ok(claimable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anchor_lang::prelude::Pubkey;

    fn sched(
        start_ts: i64,
        cliff_ts: i64,
        end_ts: i64,
        total_allotment: u64,
        total_withdrawn: u64,
    ) -> VestingSchedule {
        VestingSchedule {
            beneficiary: Pubkey::default(),
            registry: Pubkey::default(),
            start_ts,
            cliff_ts,
            end_ts,
            total_allotment,
            total_withdrawn,
            bump: 0,
        }
    }

    #[test]
    fn nothing_vests_before_cliff() {
        let s = sched(0, 100, 200, 1000, 0);
        assert_eq!(vested_amount(&s, 50).unwrap(), 0);
        assert!(matches!(
            claimable_amount(&s, 50),
            Err(EscrowError::NothingToClaim)
        ));
        // one second before the cliff is still gated
        assert_eq!(vested_amount(&s, 99).unwrap(), 0);
    }

    #[test]
    fn cliff_instant_uses_linear_value() {
        // At now == cliff the linear term applies, not zero.
        let s = sched(0, 100, 200, 1000, 0);
        assert_eq!(vested_amount(&s, 100).unwrap(), 500);
        assert_eq!(claimable_amount(&s, 100).unwrap(), 500);
    }

    #[test]
    fn linear_midpoint() {
        let s = sched(0, 100, 200, 1000, 0);
        assert_eq!(vested_amount(&s, 150).unwrap(), 750);
        assert_eq!(claimable_amount(&s, 150).unwrap(), 750);
    }

    #[test]
    fn remainder_after_partial_claim() {
        let s = sched(0, 100, 200, 1000, 750);
        assert_eq!(vested_amount(&s, 200).unwrap(), 1000);
        assert_eq!(claimable_amount(&s, 200).unwrap(), 250);
    }

    #[test]
    fn end_boundary_is_exact_despite_truncation() {
        // span 3 does not divide 10; the short-circuit guarantees exactness.
        let s = sched(0, 0, 3, 10, 0);
        assert_eq!(vested_amount(&s, 1).unwrap(), 3);
        assert_eq!(vested_amount(&s, 2).unwrap(), 6);
        assert_eq!(vested_amount(&s, 3).unwrap(), 10);
        assert_eq!(vested_amount(&s, 1_000_000).unwrap(), 10);
    }

    #[test]
    fn vesting_is_monotonic() {
        let s = sched(10, 40, 310, 7_777, 0);
        let mut prev = 0u64;
        for now in 40..=310 {
            let v = vested_amount(&s, now).unwrap();
            assert!(v >= prev, "vested decreased at {now}");
            prev = v;
        }
        assert_eq!(prev, 7_777);
    }

    #[test]
    fn fully_withdrawn_rejects_further_claims() {
        let s = sched(0, 100, 200, 1000, 1000);
        assert!(matches!(
            claimable_amount(&s, 500),
            Err(EscrowError::NothingToClaim)
        ));
    }

    #[test]
    fn claims_never_exceed_allotment() {
        // Claim at a handful of instants, tracking withdrawn like the program does.
        let mut s = sched(0, 100, 200, 1_000_003, 0);
        for now in [100, 101, 150, 199, 200, 900] {
            if let Ok(c) = claimable_amount(&s, now) {
                assert!(c > 0);
                s.total_withdrawn = s.total_withdrawn.checked_add(c).unwrap();
            }
            assert!(s.total_withdrawn <= s.total_allotment);
        }
        assert_eq!(s.total_withdrawn, s.total_allotment);
    }

    #[test]
    fn repeated_claim_at_same_instant_rejected() {
        let mut s = sched(0, 100, 200, 1000, 0);
        let first = claimable_amount(&s, 150).unwrap();
        s.total_withdrawn += first;
        assert!(matches!(
            claimable_amount(&s, 150),
            Err(EscrowError::NothingToClaim)
        ));
    }

    #[test]
    fn large_allotment_no_overflow() {
        let s = sched(0, 0, i64::MAX, u64::MAX, 0);
        let v = vested_amount(&s, i64::MAX / 2).unwrap();
        assert!(v <= u64::MAX / 2 + 1);
    }

    #[test]
    fn validate_accepts_cliff_at_start_or_end() {
        assert!(validate_schedule(0, 0, 100, 1).is_ok());
        assert!(validate_schedule(0, 100, 100, 1).is_ok());
        assert!(validate_schedule(-100, 0, 100, 1).is_ok());
    }

    #[test]
    fn validate_rejects_bad_ordering() {
        // cliff after end
        assert!(matches!(
            validate_schedule(0, 200, 100, 1000),
            Err(EscrowError::InvalidSchedule)
        ));
        // start after cliff
        assert!(matches!(
            validate_schedule(150, 100, 200, 1000),
            Err(EscrowError::InvalidSchedule)
        ));
    }

    #[test]
    fn validate_rejects_degenerate_schedule() {
        assert!(matches!(
            validate_schedule(100, 100, 100, 1000),
            Err(EscrowError::InvalidSchedule)
        ));
        assert!(matches!(
            validate_schedule(0, 50, 100, 0),
            Err(EscrowError::InvalidSchedule)
        ));
    }
}
