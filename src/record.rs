use std::fmt;

/// A price in whole cents. Integer storage gives the search key a total order
/// and exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(u64);

impl Price {
    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Price(dollars * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "${}.{:02}",
            group_thousands(self.0 / 100),
            self.0 % 100
        )
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Lowest price the generator produces.
pub const MIN_PRICE: Price = Price::from_dollars(20_000);
/// Highest price the generator produces.
pub const MAX_PRICE: Price = Price::from_dollars(120_000);
/// Search target that no generated record carries.
pub const ABSENT_PRICE: Price = Price::from_dollars(10_000_000_000);

const _: () = assert!(ABSENT_PRICE.cents() > MAX_PRICE.cents());

/// One benchmark record: a vehicle keyed by its price.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub name: String,
    pub price: Price,
    pub wheels: u8,
    pub doors: u8,
    pub seats: u8,
    /// Kilometres.
    pub mileage: f64,
    pub horsepower: f64,
    /// km/h.
    pub max_speed: f64,
}

impl Record {
    pub fn key(&self) -> Price {
        self.price
    }
}

/// Key extractor handed to the search and sort routines.
pub fn price_of(record: &&Record) -> Price {
    record.price
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {:.2} km, {:.2} hp, {:.2} km/h, {} wheels, {} doors, {} seats)",
            self.name,
            self.price,
            self.mileage,
            self.horsepower,
            self.max_speed,
            self.wheels,
            self.doors,
            self.seats
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_display_groups_thousands() {
        assert_eq!(Price::from_cents(2_345_678).to_string(), "$23,456.78");
        assert_eq!(Price::from_cents(5).to_string(), "$0.05");
        assert_eq!(Price::from_dollars(100).to_string(), "$100.00");
        assert_eq!(Price::from_dollars(1_000).to_string(), "$1,000.00");
        assert_eq!(MAX_PRICE.to_string(), "$120,000.00");
    }

    #[test]
    fn test_absent_price_outside_generated_range() {
        assert!(ABSENT_PRICE > MAX_PRICE);
        assert!(MIN_PRICE < MAX_PRICE);
    }
}
