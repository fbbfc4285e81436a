mod macros;

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use letterbox_utils::Apply;
    /// fn add_option(a: i32, b: Option<i32>) -> i32 {
    ///     a.apply_map(b, |slf, arg| slf + arg)
    /// }
    /// assert_eq!(add_option(1, None), 1);
    /// assert_eq!(add_option(1, Some(2)), 3);
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_map() {
        let builder = String::from("a").apply_map(Some("b"), |s, x| s + x);
        assert_eq!(builder, "ab");

        let builder = String::from("a").apply_map(None::<&str>, |s, x| s + x);
        assert_eq!(builder, "a");
    }

    #[test]
    fn assert_matches_with_guard() {
        let result: Result<u8, ()> = Ok(7);
        crate::assert_matches!(result, Ok(x) if x == 7);
    }

    #[test]
    #[should_panic(expected = "does not match `Ok(_)`")]
    fn assert_matches_fails() {
        let result: Result<u8, ()> = Err(());
        crate::assert_matches!(result, Ok(_));
    }
}
