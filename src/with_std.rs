
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        slice,
        str,
        string,
        vec,
        f32,
        f64,
    };

    pub use std::borrow::Cow;
    pub use std::string::String;
    pub use std::vec::Vec;
}
