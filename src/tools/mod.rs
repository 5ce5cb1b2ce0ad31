pub(crate) mod env_args;
pub(crate) mod test;
