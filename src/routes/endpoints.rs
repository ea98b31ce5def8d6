//! Route paths of the transactions API.

pub const TRANSACTIONS: &str = "/api/transactions";
pub const TRANSACTIONS_SLASH: &str = "/api/transactions/";
pub const INITIALIZE: &str = "/api/transactions/initialize";
pub const STATISTICS: &str = "/api/transactions/statistics";
pub const BAR_CHART: &str = "/api/transactions/bar-chart";
pub const PIE_CHART: &str = "/api/transactions/pie-chart";
pub const COMBINED: &str = "/api/transactions/combined";
