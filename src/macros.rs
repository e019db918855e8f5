// src/macros.rs
//! String helpers used when building option defaults, file names and fields.

/// Owned `String` from anything `String: From` accepts; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($value:expr) => {
        ::std::string::String::from($value)
    };
}

/// Glue `&str` parts into one `String`, left to right.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        let mut out = ::std::string::String::new();
        $(
            out.push_str(::core::convert::AsRef::<str>::as_ref($part));
        )+
        out
    }};
}
