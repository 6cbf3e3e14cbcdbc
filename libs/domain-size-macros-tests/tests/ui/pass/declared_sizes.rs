// Sizes declared with every accepted attribute form are readable by type.

use domain_size::{DomainSize, HasDomainSize, domain_size_of};

const SUITS: u32 = 4;

#[derive(DomainSize)]
#[domain_size(2)]
pub struct Coin;

#[derive(DomainSize)]
#[domain_size(value = 6)]
pub struct Die;

#[derive(DomainSize)]
#[domain_size(SUITS)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

#[derive(DomainSize)]
#[domain_size(value = 1_000_000u32,)]
pub struct Big;

pub struct Unknown;

fn main() {
    assert_eq!(Coin::DOMAIN_SIZE.value(), 2);
    assert_eq!(domain_size_of::<Die>(), Some(DomainSize::new(6)));
    assert_eq!(domain_size_of::<Suit>(), Some(DomainSize::new(SUITS)));
    assert_eq!(domain_size_of::<Big>(), Some(DomainSize::new(1_000_000)));
    assert_eq!(domain_size_of::<Unknown>(), None);
}
