mod user_dto;

pub use user_dto::{
    UpdateProfileDto, UpdateUserDto, UserResponseDto, UserSearchQuery,
};
