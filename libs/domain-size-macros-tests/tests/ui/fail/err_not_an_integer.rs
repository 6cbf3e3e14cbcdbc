use domain_size::DomainSize;

#[derive(DomainSize)]
#[domain_size("six")]
struct Die;

fn main() {}
