//! The built-in widgets.
//!
//! Each module holds a widget's configuration, its [`StyleDescriptor`](crate::style::StyleDescriptor), and the
//! component itself. Style-only widgets have no behavior beyond the [`Component`](crate::component::Component) base.
//!
//! Option names serialize in camelCase (`bgColor`, `trackWidth`, ...) with the `serde` feature.

/// Declares a component that only carries styles.
macro_rules! style_component {
    ($(#[$meta:meta])* $name:ident, $style:ty $(, native = $native:literal)?) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            host: $crate::component::Host,
        }

        impl $name {
            pub fn new(registry: &mut $crate::component::Registry, element: $crate::dom::Element) -> Result<Self, $crate::component::ComponentError> {
                Ok(Self {
                    host: registry.create::<Self>(element)?,
                })
            }
        }

        impl $crate::component::Component for $name {
            type Style = $style;
            const NAME: &'static str = stringify!($name);
            $(const NATIVE_TAG: Option<&'static str> = Some($native);)?

            fn host(&self) -> &$crate::component::Host {
                &self.host
            }

            fn host_mut(&mut self) -> &mut $crate::component::Host {
                &mut self.host
            }
        }
    };
}

pub mod badge;
pub mod box_arrow;
pub mod button;
pub mod button_group;
pub mod button_pin;
pub mod button_square;
pub mod card;
pub mod checkbox;
pub mod input;
pub mod input_date;
pub mod input_number;
pub mod input_radio;
pub mod input_tag;
pub mod menu;
pub mod progress_bar;
pub mod progress_circle;
pub mod sidebar;
pub mod switch;
pub mod tab;
pub mod table;
pub mod tag;

pub use badge::Badge;
pub use box_arrow::BoxArrow;
pub use button::Button;
pub use button_group::ButtonGroup;
pub use button_pin::ButtonPin;
pub use button_square::ButtonSquare;
pub use card::Card;
pub use checkbox::Checkbox;
pub use input::Input;
pub use input_date::InputDate;
pub use input_number::{InputNumber, InputNumberCenter};
pub use input_radio::InputRadio;
pub use input_tag::InputTag;
pub use menu::Menu;
pub use progress_bar::ProgressBar;
pub use progress_circle::ProgressCircle;
pub use sidebar::Sidebar;
pub use switch::Switch;
pub use tab::Tab;
pub use table::Table;
pub use tag::{Tag, TagX};
