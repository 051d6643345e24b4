/// Empty strings stand for options that were not given.
pub struct ActivateArgs {
    pub team_key: String,
    pub username: String,
    pub password: String,
    pub two_factor_code: String,
}

pub struct KvsGetArgs {
    pub key: String,
}

pub struct KvsSetArgs {
    pub key: String,
    pub value: String,
}
