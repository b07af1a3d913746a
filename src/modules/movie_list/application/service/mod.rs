pub mod list_item_service;
pub mod list_management_service;
pub mod list_read_service;

pub use list_item_service::ListItemService;
pub use list_management_service::ListManagementService;
pub use list_read_service::ListReadService;
