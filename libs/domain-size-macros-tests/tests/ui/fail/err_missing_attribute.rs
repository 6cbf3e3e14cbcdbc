use domain_size::DomainSize;

#[derive(DomainSize)]
struct Unknown;

fn main() {}
