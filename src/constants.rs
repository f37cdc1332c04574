pub const MEMBER_ADDED: &str = "MEMBER_ADDED";
pub const GROUP_CREATED: &str = "GROUP_CREATED";
pub const GROUP_DELETED: &str = "GROUP_DELETED";
pub const MEMBER_INVITED: &str = "MEMBER_INVITED";
pub const MEMBER_JOINED: &str = "MEMBER_JOINED";
pub const MEMBER_REMOVED: &str = "MEMBER_REMOVED";
pub const EXPENSE_ADDED: &str = "EXPENSE_ADDED";
pub const EXPENSE_REPLACED: &str = "EXPENSE_REPLACED";
pub const EXPENSE_DELETED: &str = "EXPENSE_DELETED";
pub const DEBT_RECORDED: &str = "DEBT_RECORDED";
pub const DEBT_SETTLED: &str = "DEBT_SETTLED";
pub const DEBT_REOPENED: &str = "DEBT_REOPENED";
pub const BUDGET_SET: &str = "BUDGET_SET";
pub const BUDGET_SPENDING_REFRESHED: &str = "BUDGET_SPENDING_REFRESHED";

pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_TITLE_LENGTH: usize = 255;
pub const MAX_CATEGORY_LENGTH: usize = 50;
/// 1,000,000.00 in minor units
pub const MAX_AMOUNT_MINOR: i64 = 100_000_000;
