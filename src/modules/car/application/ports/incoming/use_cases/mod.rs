mod create_car;
mod delete_car;
mod get_cars;
mod get_single_car;
mod update_car;
mod update_car_photo;

pub use create_car::{CreateCarError, CreateCarUseCase};
pub use delete_car::{DeleteCarError, DeleteCarUseCase};
pub use get_cars::{GetCarsError, GetCarsUseCase};
pub use get_single_car::{GetSingleCarError, GetSingleCarUseCase};
pub use update_car::{UpdateCarError, UpdateCarUseCase};
pub use update_car_photo::{UpdateCarPhotoError, UpdateCarPhotoUseCase};
