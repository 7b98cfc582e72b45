mod identity_gate;
mod sale_lifecycle;
mod token_vesting;
