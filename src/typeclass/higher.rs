//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over `Option<_>` or `UnsafeOptional<_>` as bare type
//! constructors. [`TypeConstructor`] names the constructor's current inner
//! type and lets a trait method return "the same constructor applied to `B`",
//! which is what [`Functor`](super::Functor) and [`Monad`](super::Monad) need.
//!
//! # Example
//!
//! ```rust
//! use tryopt::typeclass::TypeConstructor;
//!
//! fn reset<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none_string: Option<String> = reset(Some(42));
//! assert_eq!(none_string, None);
//! ```

/// A type constructor applied to some inner type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

#[cfg(feature = "control")]
impl<A> TypeConstructor for crate::control::UnsafeOptional<A> {
    type Inner = A;
    type WithType<B> = crate::control::UnsafeOptional<B>;
}

#[cfg(feature = "effect")]
impl<A> TypeConstructor for crate::effect::TryOption<A> {
    type Inner = A;
    type WithType<B> = crate::effect::TryOption<B>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn option_inner_type_is_correct() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Option<i32>>();
    }

    #[cfg(feature = "control")]
    #[test]
    fn unsafe_optional_keeps_nested_inner_type() {
        use crate::control::UnsafeOptional;

        fn assert_inner<T: TypeConstructor<Inner = Option<i32>>>() {}
        assert_inner::<UnsafeOptional<Option<i32>>>();
    }

    #[cfg(feature = "effect")]
    #[test]
    fn try_option_with_type_is_try_option() {
        use crate::effect::TryOption;

        fn assert_with_type<T>()
        where
            T: TypeConstructor<Inner = i32, WithType<String> = TryOption<String>>,
        {
        }
        assert_with_type::<TryOption<i32>>();
    }

    #[rstest]
    #[case(Some(42))]
    #[case(None)]
    fn option_with_type_inner_roundtrip(#[case] original: Option<i32>) {
        fn roundtrip<T: TypeConstructor>(value: T) -> T::WithType<T::Inner>
        where
            T: Into<T::WithType<T::Inner>>,
        {
            value.into()
        }

        let result: Option<i32> = roundtrip(original);
        assert_eq!(result, original);
    }

    #[test]
    fn chained_with_type_transformations() {
        type Step1 = <Option<i32> as TypeConstructor>::WithType<String>;
        type Step2 = <Step1 as TypeConstructor>::WithType<bool>;

        fn assert_is_bool_inner<T: TypeConstructor<Inner = bool>>() {}
        assert_is_bool_inner::<Step2>();
    }
}
