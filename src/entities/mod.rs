pub mod delivery_trip;
pub mod distributor;
pub mod order;
pub mod order_item;
pub mod product;
pub mod scheduling_draft;
pub mod store;

pub use delivery_trip::Entity as DeliveryTrip;
pub use distributor::Entity as Distributor;
pub use order::Entity as Order;
pub use order_item::Entity as OrderItem;
pub use product::Entity as Product;
pub use scheduling_draft::Entity as SchedulingDraft;
pub use store::Entity as Store;
