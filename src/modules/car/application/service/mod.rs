mod create_car_service;
mod delete_car_service;
mod get_cars_service;
mod get_single_car_service;
mod update_car_photo_service;
mod update_car_service;

pub use create_car_service::CreateCarService;
pub use delete_car_service::DeleteCarService;
pub use get_cars_service::GetCarsService;
pub use get_single_car_service::GetSingleCarService;
pub use update_car_photo_service::UpdateCarPhotoService;
pub use update_car_service::UpdateCarService;
