use domain_size::DomainSize;

#[derive(DomainSize)]
#[domain_size(-1)]
struct Negative;

fn main() {}
