/// Creates a `String` from anything that `String` can be built from.
///
/// # Examples
/// ```
/// use kiwi_boot_utils::string;
///
/// let name = string!("dracut");
/// assert_eq!(name, String::from("dracut"));
/// ```
#[macro_export]
macro_rules! string {
    ($str:expr) => {
        ::std::string::String::from($str)
    };
}

/// Creates a `Vec<String>` from a list of values.
///
/// # Examples
/// ```
/// use kiwi_boot_utils::string_vec;
///
/// let modules = string_vec!["lvm", "crypt"];
/// assert_eq!(modules, vec![String::from("lvm"), String::from("crypt")]);
/// ```
#[macro_export]
macro_rules! string_vec {
    ($($string:expr),* $(,)?) => {
        {
            ::std::vec![$($crate::string!($string),)*]
        }
    };
}
