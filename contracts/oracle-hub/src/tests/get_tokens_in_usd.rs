#![cfg(test)]
extern crate std;

use crate::tests::sut::{init_hub, set_time};
use crate::*;
use soroban_sdk::testutils::Address as _;

#[test]
fn should_scale_amount_up_for_small_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 6, 8, 200_000_000, &[0, 10, 20]);

    assert_eq!(
        sut.hub.get_tokens_in_usd(&token, &1_000_000),
        2_000_000_000_000_000_000
    );
}

#[test]
fn should_convert_with_usd_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 18, 8, 150_000_000, &[0, 10, 20]);

    assert_eq!(
        sut.hub.get_tokens_in_usd(&token, &3_000_000_000_000_000_000),
        4_500_000_000_000_000_000
    );
}

#[test]
fn should_scale_price_down_for_large_decimals() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 24, 8, 200_000_000, &[0, 10, 20]);

    assert_eq!(
        sut.hub
            .get_tokens_in_usd(&token, &1_000_000_000_000_000_000_000_000),
        2_000_000_000_000_000_000
    );
}

#[test]
fn should_truncate_price_before_multiplication() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 24, 8, 123_456_789, &[0, 10, 20]);

    // 123_456_789 / 10^6 = 123
    assert_eq!(
        sut.hub
            .get_tokens_in_usd(&token, &1_000_000_000_000_000_000_000_000),
        1_230_000_000_000_000_000
    );
}

#[test]
fn should_not_lose_precision_for_dust() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 6, 8, 1, &[0, 10, 20]);

    assert_eq!(sut.hub.get_tokens_in_usd(&token, &1), 10_000);
}

#[test]
fn should_return_zero_for_zero_amount() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 7, 8, 100_000_000, &[0, 10, 20]);

    assert_eq!(sut.hub.get_tokens_in_usd(&token, &0), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #405)")]
fn should_fail_when_amount_is_negative() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 7, 8, 100_000_000, &[0, 10, 20]);

    sut.hub.get_tokens_in_usd(&token, &-1);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #100)")]
fn should_fail_when_feed_is_dead() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 7, 8, 100_000_000, &[0, 10, 20]);

    set_time(&env, 1_000);

    sut.hub.get_tokens_in_usd(&token, &1_000_000);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #102)")]
fn should_fail_when_token_is_not_registered() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);

    sut.hub.get_tokens_in_usd(&Address::generate(&env), &1_000_000);
}

#[test]
fn should_fail_when_result_overflows() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 0, 0, 2, &[0, 10, 20]);

    assert_eq!(
        sut.hub.try_get_tokens_in_usd(&token, &i128::MAX),
        Err(Ok(Error::MathOverflowError))
    );
}

#[test]
fn should_fail_when_intermediate_product_overflows() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_hub(&env);
    let (token, _) = sut.add_simple_oracle(&env, 0, 38, i128::MAX, &[0, 10, 20]);

    assert_eq!(
        sut.hub.try_get_tokens_in_usd(&token, &i128::MAX),
        Err(Ok(Error::MathOverflowError))
    );
}
