/// Declares a group of settings once, as command line flags and as a plain value.
///
/// ```ignore
/// args! {
///     #[derive(Clone, Debug)]
///     Foo {
///         #[arg(value_parser = clap::value_parser!(u32).range(1..=10))]
///         "Help text"
///         size: u32 = 4;
///
///         [] "Help text for a list"
///         names: Vec<String> = vec!["a".to_owned()];
///
///         nested: Bar;
///     }
/// }
/// ```
///
/// This creates `FooCli`, a `clap::Args` struct meant to be flattened into a parser, and
/// `FooArgs`, the value the library code is configured with. Attributes in front of the
/// whole group go on `FooArgs`, attributes in front of a field go on that field of `FooCli`
/// next to the generated `long`, default and help. `FooArgs::default()` agrees with the
/// flag defaults, and every field gets a builder method of the same name. Lists are
/// marked with `[]`, and `name: Group;` nests another group declared with this macro.
#[macro_export]
macro_rules! args {
    (
        $(#$argsmeta:tt)*
        $name:ident {
            $(
                $(#[$fattr:meta])*
                $fhelp:literal
                $fname:ident: $ftype:ty = $fdefault:expr;
            )*
            $(
                []
                $(#[$vattr:meta])*
                $vhelp:literal
                $vname:ident: $vtype:ty = $vdefault:expr;
            )*
            $($gname:ident: $group:ident;)*
        }
    ) => {
        $crate::bin_common::args::args_helper::paste! {
            #[derive(clap::Args, Debug)]
            pub struct [<$name Cli>] {
                $(
                    #[arg(long, default_value_t = ($fdefault), help = $fhelp)]
                    $(#[$fattr])*
                    $fname: $ftype,
                )*
                $(
                    #[arg(long, default_values_t = ($vdefault), help = $vhelp)]
                    $(#[$vattr])*
                    $vname: $vtype,
                )*
                $(
                    #[command(flatten)]
                    $gname: [<$group Cli>],
                )*
            }

            $(#$argsmeta)*
            pub struct [<$name Args>] {
                $($fname: $ftype,)*
                $($vname: $vtype,)*
                $($gname: [<$group Args>],)*
            }

            impl std::default::Default for [<$name Args>] {
                fn default() -> Self {
                    Self {
                        $($fname: $fdefault,)*
                        $($vname: $vdefault.into_iter().collect(),)*
                        $($gname: std::default::Default::default(),)*
                    }
                }
            }

            impl [<$name Args>] {
                $(
                    pub fn $fname(self, $fname: $ftype) -> Self {
                        Self { $fname, ..self }
                    }
                )*
                $(
                    pub fn $vname(self, $vname: $vtype) -> Self {
                        Self { $vname, ..self }
                    }
                )*
                $(
                    pub fn $gname(self, $gname: [<$group Args>]) -> Self {
                        Self { $gname, ..self }
                    }
                )*
            }

            impl [<$name Cli>] {
                pub fn to_args(&self) -> [<$name Args>] {
                    [<$name Args>]::from(self)
                }
            }

            impl std::convert::From<&[<$name Cli>]> for [<$name Args>] {
                fn from(cli: &[<$name Cli>]) -> Self {
                    Self {
                        $($fname: cli.$fname.clone(),)*
                        $($vname: cli.$vname.clone(),)*
                        $($gname: cli.$gname.to_args(),)*
                    }
                }
            }
        }
    };
}

pub use args;
pub use paste::paste;
