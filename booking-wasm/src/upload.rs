use std::rc::Rc;

use booking_core::constants::PHOTO;
use booking_core::preview::{is_object_url, previewable};
use log::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, File, HtmlImageElement, HtmlInputElement, Url};

use crate::constants::{AVATAR_INPUT, AVATAR_PREVIEW, IMAGES_INPUT, PHOTO_CONTAINER};
use crate::utils::{asset_url, select_in};

/// Avatar preview and the single-photo thumbnail slot of the advert form.
pub struct ImagePreviews {
    document: Document,
    avatar_preview: HtmlImageElement,
    photo_container: Element,
}

impl ImagePreviews {
    pub fn new(document: Document, ad_form: &Element) -> Result<Self, JsValue> {
        Ok(ImagePreviews {
            avatar_preview: select_in(ad_form, AVATAR_PREVIEW)?,
            photo_container: select_in(ad_form, PHOTO_CONTAINER)?,
            document,
        })
    }

    /// Replace whatever the photo slot holds with one empty thumbnail.
    pub fn create_thumbnail_photo(&self) -> Result<HtmlImageElement, JsValue> {
        if let Some(photo) = self.photo() {
            revoke_src(&photo);
        }
        self.photo_container.set_inner_html("");
        let preview: HtmlImageElement = self.document.create_element("img")?.dyn_into()?;
        preview.set_alt(PHOTO.alt);
        preview.set_width(PHOTO.width);
        preview.set_height(PHOTO.height);
        self.photo_container.append_child(&preview)?;
        Ok(preview)
    }

    /// Empty the photo slot and put the default avatar back.
    pub fn reset_images(&self) {
        if let Some(photo) = self.photo() {
            revoke_src(&photo);
        }
        self.photo_container.set_inner_html("");
        revoke_src(&self.avatar_preview);
        self.avatar_preview.set_src(&asset_url(PHOTO.default_src));
    }

    fn photo(&self) -> Option<HtmlImageElement> {
        select_in(&self.photo_container, "img").ok()
    }
}

/// Point `preview` at `file` when it is an image; anything else is ignored.
pub fn render_thumbnail(file: Option<&File>, preview: &HtmlImageElement) -> Result<(), JsValue> {
    let Some(file) = file else {
        return Ok(());
    };
    if !previewable(Some(&file.type_())) {
        debug!("ignoring {} of type {:?}", file.name(), file.type_());
        return Ok(());
    }
    let url = Url::create_object_url_with_blob(file)?;
    revoke_src(preview);
    preview.set_src(&url);
    Ok(())
}

// Release the blob behind a preview before its src is replaced or dropped.
fn revoke_src(preview: &HtmlImageElement) {
    let src = preview.src();
    if is_object_url(&src) {
        if let Err(e) = Url::revoke_object_url(&src) {
            warn!("revoking {src} failed: {e:?}");
        }
    }
}

fn first_file(input: &HtmlInputElement) -> Option<File> {
    input.files().and_then(|files| files.item(0))
}

fn on_change(input: &HtmlInputElement, mut handler: impl FnMut(Option<File>) + 'static) {
    let input_for_closure = input.clone();
    let onchange = Closure::<dyn FnMut(Event)>::wrap(Box::new(move |_e: Event| {
        handler(first_file(&input_for_closure));
    }));
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget();
}

// Wires the avatar and photo file inputs to their previews.
pub fn attach_file_inputs(previews: Rc<ImagePreviews>, ad_form: &Element) -> Result<(), JsValue> {
    let avatar: HtmlInputElement = select_in(ad_form, AVATAR_INPUT)?;
    let photos: HtmlInputElement = select_in(ad_form, IMAGES_INPUT)?;

    let pv = previews.clone();
    on_change(&avatar, move |file| {
        if let Err(e) = render_thumbnail(file.as_ref(), &pv.avatar_preview) {
            warn!("avatar preview failed: {e:?}");
        }
    });

    on_change(&photos, move |file| {
        let mime = file.as_ref().map(|f| f.type_());
        if !previewable(mime.as_deref()) {
            return;
        }
        let Some(file) = file else {
            return;
        };
        let result = previews
            .create_thumbnail_photo()
            .and_then(|preview| render_thumbnail(Some(&file), &preview));
        if let Err(e) = result {
            warn!("photo preview failed: {e:?}");
        }
    });
    Ok(())
}
