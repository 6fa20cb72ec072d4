mod service_dto;

pub use service_dto::{
    AdminServiceResponseDto, CreateServiceDto, PublicServiceDto, SearchServicesQuery,
    ServiceResponseDto, UpdateServiceDto,
};
