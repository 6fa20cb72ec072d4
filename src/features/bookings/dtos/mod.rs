mod booking_dto;

pub use booking_dto::{
    AdminBookingDto, AdminBookingsQuery, BookingResponseDto, BookingStatsDto,
    CreateBookingDto, CustomerBookingDto, ProviderBookingDto, UpdateBookingStatusDto,
};
