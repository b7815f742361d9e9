//! Domain records shared between the server and API clients

pub mod menu;
pub mod order;
pub mod user;

pub use menu::{MenuItem, MenuItemCreate, MenuItemUpdate, MenuQuery};
pub use order::{Order, OrderCreate, OrderItem, OrderItemInput, OrderStatus, OrderStatusUpdate};
pub use user::{LoginRequest, User, UserCreate, UserRole};
