use domain_size::DomainSize;

#[derive(DomainSize)]
#[domain_size(size = 6)]
struct Die;

fn main() {}
