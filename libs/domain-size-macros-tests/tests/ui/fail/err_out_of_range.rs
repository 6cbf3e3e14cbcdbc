use domain_size::DomainSize;

#[derive(DomainSize)]
#[domain_size(4_294_967_296)]
struct TooBig;

fn main() {}
