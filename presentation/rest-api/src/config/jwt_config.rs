use anyhow::Context;

use super::env::{non_empty_var, var_or};

pub struct JwtConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

impl JwtConfig {
    /// Environment variables:
    /// - JWT_SECRET: HS256 signing secret (required)
    /// - JWT_TTL_HOURS: token lifetime (default: 24)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            secret: non_empty_var("JWT_SECRET").context("JWT_SECRET must be set")?,
            ttl_hours: var_or("JWT_TTL_HOURS", 24i64).max(1),
        })
    }
}
