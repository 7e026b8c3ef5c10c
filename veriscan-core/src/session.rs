use veriscan_providers::common_models::auth::AccessToken;

/// Explicit session context. Everything the embedding application knows
/// about the signed-in operator travels with this object; nothing is read
/// from ambient globals.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub token: Option<AccessToken>,
    pub operator: Option<Operator>,
}

#[derive(Debug, Clone)]
pub struct Operator {
    pub name: String,
    pub role: String,
}

impl SessionContext {
    pub fn authenticated(token: AccessToken, operator: Operator) -> Self {
        Self {
            token: Some(token),
            operator: Some(operator),
        }
    }

    /// Context for the unauthenticated public verification surface.
    pub fn anonymous() -> Self {
        Self::default()
    }
}
