use stayflow_domain::HourOfDay;
use time::Date;

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request changes to a stay; every
/// date-affecting command re-runs the scheduling pipeline before the
/// transition is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Set the booking calendar dates.
    SetBookingDates {
        /// First day of the booking.
        start: Date,
        /// Last day of the booking (multi-night classic stays).
        end: Option<Date>,
    },
    /// Change the reservation type.
    SetReservationType {
        /// The new reservation type.
        reservation_type_id: i64,
    },
    /// Change the room type. Clears any assigned room of the old type.
    SetRoomType {
        /// The new room type.
        room_type_id: i64,
    },
    /// Assign a specific room to the stay.
    AssignRoom {
        /// The room to assign. Must match the stay's room type and be
        /// free over the stay's interval.
        room_id: i64,
    },
    /// Request an early check-in at a given hour.
    RequestEarlyCheckin {
        /// Requested arrival hour.
        hour: HourOfDay,
    },
    /// Request a late check-out at a given hour.
    RequestLateCheckout {
        /// Requested departure hour.
        hour: HourOfDay,
    },
    /// Withdraw any early/late requests and return to the planned times.
    WithdrawEclcRequests,
    /// Check the guest in.
    Start,
    /// Check the guest out.
    Checkout,
    /// Cancel the stay.
    Cancel,
}
