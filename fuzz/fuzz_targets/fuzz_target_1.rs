#![no_main]
use fastdiv::Divider;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|items: Vec<u64>| {
    let Some(&d) = items.first() else {
        return;
    };
    macro_rules! run {
        ($num_type:ty) => {{
            let d = d as $num_type;
            if let Ok(divider) = Divider::new(d) {
                assert_eq!(divider.recover(), d);
                // -1 and the signed minimum are outside the contract, 1 only for quotients
                let signed = <$num_type>::MIN != 0;
                let rem_ok = !(signed && (d == <$num_type>::MIN || d.wrapping_add(1) == 0));
                let quotient_ok = rem_ok && d != 1;
                for item in items.iter() {
                    let item = *item as $num_type;
                    if quotient_ok {
                        assert_eq!(item / &divider, item / d, "{} {} / {}", stringify!($num_type), item, d);
                        assert_eq!(divider.div_rem(item), (item / d, item % d), "{} {} /% {}", stringify!($num_type), item, d);
                    }
                    if rem_ok {
                        assert_eq!(item % &divider, item % d, "{} {} % {}", stringify!($num_type), item, d);
                    }
                    assert_eq!(divider.divisible(item), item.wrapping_rem(d) == 0, "{} {} | {}", stringify!($num_type), item, d);
                }
            }
        }};
    }
    run!(u16);
    run!(u32);
    run!(u64);
    run!(i16);
    run!(i32);
    run!(i64);
});
