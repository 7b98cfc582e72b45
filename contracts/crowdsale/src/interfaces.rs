use soroban_sdk::{contractclient, Address, BytesN, Env, Symbol};

#[contractclient(name = "VestingGrantClient")]
pub trait VestingGrantInterface {
    fn grant(env: Env, granter: Address, group: Symbol, beneficiary: Address, amount: i128);
}

#[contractclient(name = "IdentityVerifierClient")]
pub trait IdentityVerifierInterface {
    fn check_authorization(
        env: Env,
        caller: Address,
        deadline: u64,
        signer: BytesN<32>,
        signature: BytesN<64>,
    );
}
