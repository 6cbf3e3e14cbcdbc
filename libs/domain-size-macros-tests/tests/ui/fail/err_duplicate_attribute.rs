use domain_size::DomainSize;

#[derive(DomainSize)]
#[domain_size(2)]
#[domain_size(3)]
struct Coin;

fn main() {}
