use anchor_lang::error::Error;
use anchor_lang::prelude::Pubkey;
use anchor_lang::Result;

use flight_refund::constants::{RefundTier, MIN_DELAY_MINUTES, REFUND_PERCENTAGE};
use flight_refund::error::ErrorCode;
use flight_refund::state::{
    refund_amount, refund_percentage, Flight, FlightInfo, Ledger, TicketHolding,
};

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: u8 = 1;
    const LEDGER: u8 = 2;
    const FLIGHT: u8 = 4;
    const PASSENGER: u8 = 3;

    fn test_pubkey(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn flight_id(name: &str) -> [u8; 32] {
        let mut id = [0u8; 32];
        id[..name.len()].copy_from_slice(name.as_bytes());
        id
    }

    fn assert_fails<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
        assert_eq!(result.unwrap_err(), Error::from(expected));
    }

    fn new_ledger() -> Ledger {
        Ledger {
            owner: test_pubkey(OWNER),
            bump: 255,
            ..Ledger::default()
        }
    }

    fn registered_flight(ledger: &mut Ledger, name: &str, ticket_price: u64) -> Flight {
        let mut flight = Flight::default();
        ledger
            .register_flight(
                &test_pubkey(OWNER),
                test_pubkey(LEDGER),
                &mut flight,
                flight_id(name),
                ticket_price,
                254,
            )
            .unwrap();
        flight
    }

    fn buy(
        ledger: &mut Ledger,
        flight: &mut Flight,
        holding: &mut TicketHolding,
        quantity: u64,
        payment: u64,
    ) -> Result<u64> {
        ledger.book_purchase(
            Some(flight),
            test_pubkey(FLIGHT),
            holding,
            test_pubkey(PASSENGER),
            quantity,
            payment,
            253,
        )
    }

    #[test]
    fn test_flight_registration() {
        let mut ledger = new_ledger();
        let flight = registered_flight(&mut ledger, "F1", 100);

        assert_eq!(ledger.flight_count, 1);
        assert_eq!(flight.ledger, test_pubkey(LEDGER));
        assert_eq!(
            flight.info(),
            FlightInfo {
                flight_id: flight_id("F1"),
                ticket_price: 100,
                is_active: true,
                tickets_sold: 0,
            }
        );
    }

    #[test]
    fn test_duplicate_registration_keeps_price() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);

        assert_fails(
            ledger.register_flight(
                &test_pubkey(OWNER),
                test_pubkey(LEDGER),
                &mut flight,
                flight_id("F1"),
                999,
                254,
            ),
            ErrorCode::FlightAlreadyRegistered,
        );
        assert_eq!(flight.ticket_price, 100);
        assert!(flight.is_active);
        assert_eq!(ledger.flight_count, 1);
    }

    #[test]
    fn test_registration_by_stranger() {
        let mut ledger = new_ledger();
        let mut flight = Flight::default();

        assert_fails(
            ledger.register_flight(
                &test_pubkey(PASSENGER),
                test_pubkey(LEDGER),
                &mut flight,
                flight_id("F1"),
                100,
                254,
            ),
            ErrorCode::AccessDenied,
        );
        assert_eq!(flight.info(), FlightInfo::default());
        assert_eq!(ledger.flight_count, 0);
    }

    #[test]
    fn test_withdrawal_by_stranger() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap();

        assert_fails(
            ledger.withdraw(&test_pubkey(PASSENGER)),
            ErrorCode::AccessDenied,
        );
        assert_eq!(ledger.balance, 200);
        assert_eq!(ledger.total_withdrawn, 0);
    }

    #[test]
    fn test_ticket_purchase() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();

        assert_eq!(buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap(), 200);

        assert_eq!(holding.count, 2);
        assert_eq!(holding.passenger, test_pubkey(PASSENGER));
        assert_eq!(holding.flight, test_pubkey(FLIGHT));
        assert_eq!(flight.tickets_sold, 2);
        assert_eq!(ledger.balance, 200);
        assert_eq!(ledger.total_collected, 200);

        buy(&mut ledger, &mut flight, &mut holding, 3, 300).unwrap();
        assert_eq!(holding.count, 5);
        assert_eq!(flight.tickets_sold, 5);
        assert_eq!(ledger.balance, 500);
    }

    #[test]
    fn test_purchase_on_unregistered_flight() {
        let mut ledger = new_ledger();
        let mut holding = TicketHolding::default();

        assert_fails(
            ledger.book_purchase(
                None,
                test_pubkey(FLIGHT),
                &mut holding,
                test_pubkey(PASSENGER),
                1,
                100,
                253,
            ),
            ErrorCode::FlightNotFound,
        );
        assert_eq!(holding.count, 0);
        assert_eq!(ledger.balance, 0);
    }

    #[test]
    fn test_incorrect_payment() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();

        for payment in [0, 199, 201] {
            assert_fails(
                buy(&mut ledger, &mut flight, &mut holding, 2, payment),
                ErrorCode::IncorrectPayment,
            );
        }
        assert_eq!(flight.tickets_sold, 0);
        assert_eq!(holding.count, 0);
        assert_eq!(holding.passenger, Pubkey::default());
        assert_eq!(ledger.balance, 0);
        assert_eq!(ledger.total_collected, 0);
    }

    #[test]
    fn test_invalid_purchase_inputs() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        assert_fails(
            buy(&mut ledger, &mut flight, &mut holding, 0, 0),
            ErrorCode::InvalidQuantity,
        );

        let mut inactive = Flight {
            ledger: test_pubkey(LEDGER),
            ticket_price: 100,
            ..Flight::default()
        };
        assert_fails(
            buy(&mut ledger, &mut inactive, &mut holding, 1, 100),
            ErrorCode::FlightInactive,
        );

        let mut pricey = registered_flight(&mut ledger, "F2", u64::MAX);
        assert_fails(
            buy(&mut ledger, &mut pricey, &mut holding, 2, 0),
            ErrorCode::ArithmeticOverflow,
        );
        assert_eq!(holding.count, 0);
        assert_eq!(ledger.balance, 0);
    }

    #[test]
    fn test_refund_requires_minimum_delay() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap();

        for delay in [0, 20, MIN_DELAY_MINUTES - 1] {
            assert_fails(
                ledger.book_refund(Some(&flight), Some(&mut holding), delay),
                ErrorCode::DelayTooShort,
            );
        }
        // The delay is checked before anything else
        assert_fails(
            ledger.book_refund(None, None, 20),
            ErrorCode::DelayTooShort,
        );
        assert_eq!(holding.refunded_count, 0);
        assert_eq!(ledger.balance, 200);
        assert_eq!(ledger.total_refunded, 0);
    }

    #[test]
    fn test_refund_pays_fixed_percentage() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap();

        let amount = ledger
            .book_refund(Some(&flight), Some(&mut holding), MIN_DELAY_MINUTES)
            .unwrap();

        assert_eq!(amount, 200 * REFUND_PERCENTAGE as u64 / 100);
        assert_eq!(ledger.balance, 200 - amount);
        assert_eq!(ledger.total_refunded, amount);
        // Purchases are never undone by a refund
        assert_eq!(holding.count, 2);
        assert_eq!(holding.refunded_count, 2);
    }

    #[test]
    fn test_refund_cannot_be_replayed() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap();

        ledger.book_refund(Some(&flight), Some(&mut holding), 40).unwrap();
        assert_fails(
            ledger.book_refund(Some(&flight), Some(&mut holding), 40),
            ErrorCode::RefundAlreadyClaimed,
        );
        assert_eq!(ledger.balance, 100);

        // Only tickets bought after the first claim are refundable
        buy(&mut ledger, &mut flight, &mut holding, 1, 100).unwrap();
        assert_eq!(holding.refundable(), 1);
        let amount = ledger
            .book_refund(Some(&flight), Some(&mut holding), 40)
            .unwrap();
        assert_eq!(amount, 50);
        assert_eq!(ledger.balance, 150);
        assert_eq!(holding.refundable(), 0);
    }

    #[test]
    fn test_refund_without_tickets_or_flight() {
        let mut ledger = new_ledger();
        let flight = registered_flight(&mut ledger, "F1", 100);

        assert_fails(
            ledger.book_refund(Some(&flight), None, 40),
            ErrorCode::NoTicketsHeld,
        );
        let mut empty = TicketHolding::default();
        assert_fails(
            ledger.book_refund(Some(&flight), Some(&mut empty), 40),
            ErrorCode::NoTicketsHeld,
        );
        assert_fails(
            ledger.book_refund(None, Some(&mut empty), 40),
            ErrorCode::FlightNotFound,
        );
    }

    #[test]
    fn test_refund_rounding_to_zero() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "CHEAP", 1);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 1, 1).unwrap();

        assert_fails(
            ledger.book_refund(Some(&flight), Some(&mut holding), 40),
            ErrorCode::RefundAmountZero,
        );
        assert_eq!(holding.refunded_count, 0);
        assert_eq!(ledger.balance, 1);
    }

    #[test]
    fn test_refund_after_withdrawal() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap();

        assert_eq!(ledger.withdraw(&test_pubkey(OWNER)).unwrap(), 200);
        assert_fails(
            ledger.book_refund(Some(&flight), Some(&mut holding), 40),
            ErrorCode::InsufficientContractFunds,
        );
        // The failed claim leaves the holding refundable
        assert_eq!(holding.refunded_count, 0);
        assert_eq!(ledger.balance, 0);
        assert_eq!(ledger.total_refunded, 0);
    }

    #[test]
    fn test_withdrawal_twice() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();
        buy(&mut ledger, &mut flight, &mut holding, 3, 300).unwrap();

        assert_eq!(ledger.withdraw(&test_pubkey(OWNER)).unwrap(), 300);
        assert_eq!(ledger.balance, 0);
        assert_eq!(ledger.withdraw(&test_pubkey(OWNER)).unwrap(), 0);
        assert_eq!(ledger.total_withdrawn, 300);
        assert_eq!(ledger.total_collected, 300);
    }

    #[test]
    fn test_refund_tiers() {
        let tiers = [
            RefundTier { min_delay_minutes: 180, percentage: 100 },
            RefundTier { min_delay_minutes: 120, percentage: 75 },
            RefundTier { min_delay_minutes: 30, percentage: 50 },
        ];

        assert_eq!(refund_percentage(&tiers, 29), None);
        assert_eq!(refund_percentage(&tiers, 30), Some(50));
        assert_eq!(refund_percentage(&tiers, 119), Some(50));
        assert_eq!(refund_percentage(&tiers, 120), Some(75));
        assert_eq!(refund_percentage(&tiers, 600), Some(100));
    }

    #[test]
    fn test_refund_amount_rounds_down() {
        assert_eq!(refund_amount(2, 100, 50).unwrap(), 100);
        assert_eq!(refund_amount(3, 33, 50).unwrap(), 49);
        assert_eq!(refund_amount(1, u64::MAX, 100).unwrap(), u64::MAX);
        assert_fails(refund_amount(2, u64::MAX, 100), ErrorCode::ArithmeticOverflow);
    }

    #[test]
    fn test_delayed_flight_scenario() {
        let mut ledger = new_ledger();
        let mut flight = registered_flight(&mut ledger, "F1", 100);
        let mut holding = TicketHolding::default();

        buy(&mut ledger, &mut flight, &mut holding, 2, 200).unwrap();
        assert_eq!(ledger.balance, 200);
        assert_eq!(holding.count, 2);

        let refunded = ledger
            .book_refund(Some(&flight), Some(&mut holding), 40)
            .unwrap();
        assert_eq!(refunded, 200 * REFUND_PERCENTAGE as u64 / 100);
        assert_eq!(ledger.balance, 200 - refunded);

        let withdrawn = ledger.withdraw(&test_pubkey(OWNER)).unwrap();
        assert_eq!(withdrawn, 200 - refunded);
        assert_eq!(ledger.balance, 0);
        assert_eq!(
            ledger.total_collected,
            ledger.total_refunded + ledger.total_withdrawn
        );
    }
}
