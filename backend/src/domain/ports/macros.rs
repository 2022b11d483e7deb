//! `define_port_error!` declares the error enum of a driven port.
//!
//! Variants are either bare or carry one string field. Each variant gets a
//! `thiserror` message and a snake_case constructor; string fields accept
//! anything convertible into `String`, so adapters can pass `err.to_string()`
//! or a literal without ceremony.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[must_use]
            #[doc = "Build [`Self::" $variant "`]."]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident $field:ident) => {
        ::paste::paste! {
            #[must_use]
            #[doc = "Build [`Self::" $variant "`] from any string-like `" $field "`."]
            pub fn [<$variant:snake>]($field: impl Into<String>) -> Self {
                Self::$variant { $field: $field.into() }
            }
        }
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $field:ident : String } )? => $message:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $field: String } )?,
            )+
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $($field)?);
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    define_port_error! {
        /// Errors of an imaginary blob store.
        pub enum BlobStoreError {
            /// Nothing stored yet.
            Empty => "blob store is empty",
            /// Bytes could not be read.
            Read { message: String } => "blob read failed: {message}",
            /// Bytes were read but not understood.
            Decode { reason: String } => "blob is malformed: {reason}",
        }
    }

    #[rstest]
    #[case(BlobStoreError::empty(), BlobStoreError::Empty, "blob store is empty")]
    #[case(
        BlobStoreError::read("permission denied"),
        BlobStoreError::Read { message: "permission denied".to_owned() },
        "blob read failed: permission denied"
    )]
    #[case(
        BlobStoreError::decode(String::from("line 3")),
        BlobStoreError::Decode { reason: "line 3".to_owned() },
        "blob is malformed: line 3"
    )]
    fn constructors_build_the_named_variant(
        #[case] built: BlobStoreError,
        #[case] expected: BlobStoreError,
        #[case] message: &str,
    ) {
        assert_eq!(built, expected);
        assert_eq!(built.to_string(), message);
    }
}
