use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "debug_trace")] {
        macro_rules! trace {
            ( @phase $from:expr => $to:expr, $ch:expr ) => {
                if $from != $to {
                    println!("@phase {:?} -> {:?} on {:?}", $from, $to, $ch);
                }
            };

            ( @emit $($args:expr),+ ) => {
                println!("@emit {}", format_args!($($args),+));
            };

            ( @chunk $chunk:expr ) => {
                println!("@chunk {:?}", $chunk);
            };

            ( @write $data:expr ) => {
                println!("@write {} byte(s): {:?}", $data.len(), String::from_utf8_lossy($data));
            };

            ( @end ) => {
                println!("@end");
            };
        }
    } else {
        // NOTE: arguments are not evaluated when tracing is disabled, so
        // the macro must never be used for its side effects.
        macro_rules! trace {
            ( @$kind:ident $($args:tt)* ) => {};
        }
    }
}
