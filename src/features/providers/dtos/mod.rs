mod provider_dto;

pub use provider_dto::{
    AdminProviderDetailDto, AdminUpdateProviderDto, CreateProviderProfileDto, ProviderBrowseDto,
    ProviderResponseDto,
};
