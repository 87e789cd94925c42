/// Unwraps the `Err` variant, panicking with the `Ok` value otherwise.
///
/// Extra format arguments are appended to the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(actual) => {
                #[allow(unused_mut)]
                let mut msg = format!(
                    "expected `{}` to fail; actual=Ok({:?})",
                    stringify!($e),
                    actual
                );

                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?

                panic!("{}", msg);
            }
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `{}` to succeed; err={}", stringify!($e), err),
        }
    };
}
