// Generic types implement the trait; instantiations are registered explicitly.

use std::marker::PhantomData;

use domain_size::{DomainSize, HasDomainSize, domain_size_of, register_domain_size};

#[derive(DomainSize)]
#[domain_size(10)]
pub struct Digit<T>(PhantomData<T>);

#[derive(DomainSize)]
#[domain_size(3)]
pub struct Window<'a, T: Copy + 'a>(&'a [T]);

register_domain_size!(Digit<u8>);
register_domain_size!(char, 1_114_112);

fn main() {
    assert_eq!(<Digit<i64> as HasDomainSize>::DOMAIN_SIZE.value(), 10);
    assert_eq!(<Window<'static, u8> as HasDomainSize>::DOMAIN_SIZE.value(), 3);
    assert_eq!(domain_size_of::<Digit<u8>>(), Some(DomainSize::new(10)));
    assert_eq!(domain_size_of::<Digit<i64>>(), None);
    assert_eq!(domain_size_of::<char>(), Some(DomainSize::new(1_114_112)));
}
