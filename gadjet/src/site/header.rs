use gadjet_core::{
    color::Color,
    component::{Component, ComponentError, Host, Registry},
    css::{
        self,
        mixins::{self, BgColorInt, FontFluid},
    },
    dom::Element,
    style::StyleDescriptor,
};

use super::{palette, theme};

/// The landing page banner: title, tagline and the guide/GitHub buttons.
pub struct HeaderStyle;

impl StyleDescriptor for HeaderStyle {
    type Config = ();

    fn defaults() {}

    fn layout(_: &()) -> String {
        let text = css::recover(Color::parse(theme::ULTRA_RED).map(|c| c.darken(0.2).to_string()));
        let fluid = |min, max| {
            mixins::font_fluid(FontFluid {
                vw_min: 300.0,
                vw_max: 1200.0,
                font_size_min: min,
                font_size_max: max,
            })
        };
        let button = |color| css::recover(mixins::bg_color_int(BgColorInt::new(color)));

        format!(
            r#"display: flex;
            justify-content: center;
            align-items: center;
            color: {text};
            div.container {{
                display: flex;
                flex-wrap: wrap;
                justify-content: center;
                align-items: center;
                align-content: center;
                h1 {{
                    {title}
                    width: 100%;
                    text-align: center;
                    font-size: 4em;
                    margin: 0.2em;
                }}
                h2 {{
                    {tagline}
                    font-size: 2em;
                    width: 100%;
                    text-align: center;
                    margin: 0.2em;
                }}
                button[el="guide"] {{
                    {guide}
                }}
                button[el="github"] {{
                    {github}
                }}
            }}"#,
            title = fluid(35.0, 80.0),
            tagline = fluid(20.0, 40.0),
            guide = button(palette::PURPLE),
            github = button(palette::DARK),
        )
    }

    fn generate(_: &()) -> String {
        String::new()
    }
}

#[derive(Debug)]
pub struct Header {
    host: Host,
    pub guide: Element,
    pub github: Element,
}

impl Header {
    pub fn new(registry: &mut Registry, element: Element) -> Result<Self, ComponentError> {
        Ok(Self {
            host: registry.create::<Self>(element)?,
            guide: Element::part("guide"),
            github: Element::part("github"),
        })
    }
}

impl Component for Header {
    type Style = HeaderStyle;
    const NAME: &'static str = "Header";

    fn host(&self) -> &Host {
        &self.host
    }

    fn host_mut(&mut self) -> &mut Host {
        &mut self.host
    }
}
