//! The documentation site: colors, site-wide CSS and the components only the docs use.

use gadjet_core::{
    color::Color,
    component::{Component, ComponentError, Registry},
    css::{
        self,
        mixins::{self, BgColorInt, FontFluid},
    },
    widgets::{Badge, Button, ButtonPin, ButtonSquare, Tag},
};

mod code_title;
mod header;
mod sidebar;

pub use code_title::{CodeTitle, CodeTitleStyle};
pub use header::{Header, HeaderStyle};
pub use sidebar::{DocsSidebar, DocsSidebarStyle, SidebarButton};

/// GNOME palette colors, used for widgets.
pub mod palette {
    pub const BLUE: &str = "#3584e4";
    pub const GREEN: &str = "#33d17a";
    pub const YELLOW: &str = "#f6d32d";
    pub const ORANGE: &str = "#ff7800";
    pub const RED: &str = "#e01b24";
    pub const PURPLE: &str = "#9141ac";
    pub const BROWN: &str = "#986a44";
    pub const LIGHT: &str = "#deddda";
    pub const DARK: &str = "#3d3846";

    /// Every color with its name.
    pub const ALL: [(&str, &str); 9] = [
        ("blue", BLUE),
        ("green", GREEN),
        ("yellow", YELLOW),
        ("orange", ORANGE),
        ("red", RED),
        ("purple", PURPLE),
        ("brown", BROWN),
        ("light", LIGHT),
        ("dark", DARK),
    ];
}

/// The site's own colors, used for text and accents.
pub mod theme {
    pub const LIGHT_PINK: &str = "#f7b2b7";
    pub const ULTRA_RED: &str = "#f7717d";
    pub const CHINA_PINK: &str = "#de639a";
    pub const MAXIMUM_PURPLE: &str = "#7f2982";
    pub const DARK_PURPLE: &str = "#16001e";
}

/// Defines every component the pages use and injects the site CSS.
///
/// `button`, `el-button-square`, `el-button-pin`, `el-tag`, `el-badge`, `el-code-title`, `el-header` and `el-sidebar`
/// (which brings `el-sidebar-button`). Square buttons are red on the site.
pub fn define_components(registry: &mut Registry) -> Result<(), ComponentError> {
    registry.sheet().inject("el-icon > svg { fill: currentColor; }");

    Button::define(registry, "button")?;
    ButtonSquare::define(registry, "el-button-square")?;
    ButtonPin::define(registry, "el-button-pin")?;
    Tag::define(registry, "el-tag")?;
    Badge::define(registry, "el-badge")?;

    ButtonSquare::tag_style(registry, css::recover(mixins::bg_color_int(BgColorInt::new(palette::RED))))?;

    CodeTitle::define(registry, "el-code-title")?;
    Header::define(registry, "el-header")?;
    DocsSidebar::define(registry, "el-sidebar")?;

    registry.sheet().inject(&site_css());
    registry.sheet().inject(&guide_css());
    Ok(())
}

/// Typography and the layout helpers shared by every page.
pub fn site_css() -> String {
    let html_font = mixins::font_fluid(FontFluid {
        vw_min: 300.0,
        vw_max: 800.0,
        font_size_min: 14.0,
        font_size_max: 18.0,
    });
    let code_bg = css::recover(mixins::bg_color(palette::LIGHT));
    let quote_bg = Color::parse(palette::LIGHT).map(|c| c.lighten(0.1).to_string()).and_then(|c| mixins::bg_color(&c));
    let quote_bg = css::recover(quote_bg);

    format!(
        "html {{
            font-family: sans;
            {html_font}
            line-height: 1.7;
        }}

        body {{
            margin: 0;
            padding-top: 2.5rem;
        }}

        div.no-margin-next-element + * {{
            margin-top: 0;
        }}

        code {{
            font-family: code;
            font-size: 0.9em;
            border-radius: 10px;
            {code_bg}
            padding: 0.1rem 0.5rem 0.1rem 0.5rem;
            line-height: 1.4;
        }}

        pre {{
            code {{
                border-top-left-radius: 0;
            }}
        }}

        blockquote {{
            display: block;
            padding: 0.1rem 1rem 0.2rem 1rem;
            margin-left: 1.5rem;
            border-left: 7px solid {pink};
            border-radius: 10px;
            border-top-left-radius: 0;
            {quote_bg}
        }}

        .container {{
            display: block;
            max-width: 1000px;
            width: 95%;
            min-width: 300px;
            margin: auto;
            &.text {{
                h2 {{
                    margin-top: 3rem;
                    & + hr {{
                        margin-top: -0.5rem;
                        margin-bottom: 1.5rem;
                    }}
                }}
            }}
            @media only screen and (min-width: 1100px) {{
                position: relative;
                left: 50px;
            }}
        }}

        .block {{
            max-width: 400px;
            width: 100%;
        }}",
        pink = theme::CHINA_PINK,
    )
}

/// Headings and the inline links of guide pages.
pub fn guide_css() -> String {
    format!(
        "h1 {{
            text-align: center;
        }}

        h2 {{
            display: inline-block;
        }}

        h2 + a {{
            margin-left: 0.5rem;
            border: 2px solid {red};
            padding-left: 0.2rem;
            padding-right: 0.2rem;
            border-radius: 5px;
            &:hover {{
                border: 3px solid {red};
            }}
        }}",
        red = theme::ULTRA_RED,
    )
}
