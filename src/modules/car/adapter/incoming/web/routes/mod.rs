mod create_car;
mod delete_car;
mod get_car;
mod get_cars;
mod update_car;
mod update_car_photo;

pub use create_car::*;
pub use delete_car::*;
pub use get_car::*;
pub use get_cars::*;
pub use update_car::*;
pub use update_car_photo::*;
