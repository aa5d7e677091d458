use booking_core::Listing;
use booking_core::card::CardText;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

const PHOTO_WIDTH: u32 = 45;
const PHOTO_HEIGHT: u32 = 40;
const AVATAR_SIZE: u32 = 70;

fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    el.set_class_name(class);
    Ok(el)
}

fn text_element(
    document: &Document,
    parent: &Element,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> Result<(), JsValue> {
    if let Some(text) = text {
        let el = element(document, tag, class)?;
        el.set_text_content(Some(text));
        parent.append_child(&el)?;
    }
    Ok(())
}

fn image(
    document: &Document,
    class: &str,
    src: &str,
    alt: &str,
    size: (u32, u32),
) -> Result<HtmlImageElement, JsValue> {
    let img: HtmlImageElement = element(document, "img", class)?.dyn_into()?;
    img.set_src(src);
    img.set_alt(alt);
    img.set_width(size.0);
    img.set_height(size.1);
    Ok(img)
}

/// Build the popup shown when a listing marker is clicked.
pub fn render_card(document: &Document, listing: &Listing) -> Result<HtmlElement, JsValue> {
    let text = CardText::describe(listing);
    let card = element(document, "article", "popup")?;

    if let Some(avatar) = &text.avatar {
        let img = image(
            document,
            "popup__avatar",
            avatar,
            "Аватарка пользователя",
            (AVATAR_SIZE, AVATAR_SIZE),
        )?;
        card.append_child(&img)?;
    }
    let lines = [
        ("h3", "popup__title", text.title.as_deref()),
        ("p", "popup__text popup__text--address", text.address.as_deref()),
        ("p", "popup__text popup__text--price", text.price.as_deref()),
        ("h4", "popup__type", text.kind),
        ("p", "popup__text popup__text--capacity", text.capacity.as_deref()),
        ("p", "popup__text popup__text--time", text.time.as_deref()),
    ];
    for (tag, class, content) in lines {
        text_element(document, &card, tag, class, content)?;
    }

    if !text.features.is_empty() {
        let list = element(document, "ul", "popup__features")?;
        for feature in &text.features {
            let class = format!("popup__feature popup__feature--{feature}");
            text_element(document, &list, "li", &class, Some(feature))?;
        }
        card.append_child(&list)?;
    }

    text_element(document, &card, "p", "popup__description", text.description.as_deref())?;

    if !text.photos.is_empty() {
        let gallery = element(document, "div", "popup__photos")?;
        for src in &text.photos {
            let img = image(
                document,
                "popup__photo",
                src,
                "Фотография жилья",
                (PHOTO_WIDTH, PHOTO_HEIGHT),
            )?;
            gallery.append_child(&img)?;
        }
        card.append_child(&gallery)?;
    }

    card.dyn_into()
        .map_err(|_| JsValue::from_str("popup is not an HTML element"))
}
