//! Declaration macros for the schema tables.
//!
//! Each declaration emits a constant module (names, max lengths, the static
//! model) so a name is written exactly once. Value type expressions resolve
//! inside the generated module, which imports the model types.

/// Declare one item type: constant module, `ItemKind` marker and `ItemId` alias.
///
/// ```ignore
/// item_type! {
///     /// Doc for the marker.
///     assignment_item, AssignmentItem, AssignmentItemId = "AssignmentItem" {
///         TITLE = "Title": ValueType::string(1000) => MAX_TITLE_LENGTH;
///         AUTO_RETURN = "AutoReturn": ValueType::boolean(), with_default;
///     }
/// }
/// ```
#[macro_export]
macro_rules! item_type {
    (
        $(#[$meta:meta])*
        $module:ident, $kind:ident, $alias:ident = $name:literal {
            $(
                $(#[$pmeta:meta])*
                $konst:ident = $pname:literal : $ty:expr $(, $modifier:ident)* $(=> $max:ident)? ;
            )*
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            #[allow(unused_imports)]
            use $crate::__reexports::learnstore_core::model::{
                item::{ItemTypeModel, PropertyModel},
                value::ValueType,
            };

            pub const ITEM_TYPE_NAME: &str = $name;
            pub const ID: &str = $crate::__reexports::learnstore_core::ID_PROPERTY;

            $(
                $(#[$pmeta])*
                pub const $konst: &str = $pname;
                $(
                    pub const $max: i32 = match ($ty).max_length() {
                        Some(len) => len,
                        None => panic!("max length declared on a fixed-width property"),
                    };
                )?
            )*

            pub const PROPERTIES: &[PropertyModel] = &[
                $( PropertyModel::new($konst, $ty) $(.$modifier())* , )*
            ];

            pub static MODEL: ItemTypeModel = ItemTypeModel::new(ITEM_TYPE_NAME, PROPERTIES);
        }

        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub struct $kind;

        impl $crate::__reexports::learnstore_core::traits::ItemKind for $kind {
            const ITEM_TYPE_NAME: &'static str = $module::ITEM_TYPE_NAME;
            const MODEL: &'static $crate::__reexports::learnstore_core::model::item::ItemTypeModel =
                &$module::MODEL;
        }

        pub type $alias = $crate::__reexports::learnstore_core::types::ItemId<$kind>;
    };
}

/// Declare one view: name, column and parameter constants, static model.
#[macro_export]
macro_rules! view {
    (
        $(#[$meta:meta])*
        $module:ident = $name:literal {
            columns {
                $( $konst:ident = $cname:literal : $ty:expr ; )*
            }
            $(
                parameters {
                    $( $pkonst:ident = $pname:literal : $pty:expr ; )*
                }
            )?
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            #[allow(unused_imports)]
            use $crate::__reexports::learnstore_core::model::{
                value::ValueType,
                view::{ColumnModel, ParameterModel, ViewModel},
            };

            pub const VIEW_NAME: &str = $name;

            $( pub const $konst: &str = $cname; )*
            $( $( pub const $pkonst: &str = $pname; )* )?

            pub const COLUMNS: &[ColumnModel] = &[
                $( ColumnModel::new($konst, $ty), )*
            ];

            pub const PARAMETERS: &[ParameterModel] = &[
                $( $( ParameterModel::new($pkonst, $pty), )* )?
            ];

            pub static MODEL: ViewModel = ViewModel::new(VIEW_NAME, COLUMNS, PARAMETERS);
        }
    };
}

/// Declare one security right: name, parameter constants, static model.
#[macro_export]
macro_rules! right {
    (
        $(#[$meta:meta])*
        $module:ident = $name:literal {
            $( $konst:ident = $pname:literal : $ty:expr ; )*
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            #[allow(unused_imports)]
            use $crate::__reexports::learnstore_core::model::{
                right::RightModel,
                value::ValueType,
                view::ParameterModel,
            };

            pub const RIGHT_NAME: &str = $name;

            $( pub const $konst: &str = $pname; )*

            pub const PARAMETERS: &[ParameterModel] = &[
                $( ParameterModel::new($konst, $ty), )*
            ];

            pub static MODEL: RightModel = RightModel::new(RIGHT_NAME, PARAMETERS);
        }
    };
}

/// Declare one enum: name, one `i32` constant per member, static model.
#[macro_export]
macro_rules! enumeration {
    (
        $(#[$meta:meta])*
        $module:ident = $name:literal {
            $( $konst:ident = $vname:literal => $value:literal ; )*
        }
    ) => {
        $(#[$meta])*
        pub mod $module {
            use $crate::__reexports::learnstore_core::model::enumeration::{
                EnumModel, EnumValueModel,
            };

            pub const ENUM_NAME: &str = $name;

            $( pub const $konst: i32 = $value; )*

            pub const VALUES: &[EnumValueModel] = &[
                $( EnumValueModel::new($vname, $value), )*
            ];

            pub static MODEL: EnumModel = EnumModel::new(ENUM_NAME, VALUES);
        }
    };
}
