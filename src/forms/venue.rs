//! Venue create/edit submissions

use super::{
    FormData, FormError, ValidationErrors, finish, parse_profile, parse_profile_patch,
    required_text,
};
use crate::domain::{NewVenue, VenuePatch};

const SEEKING_FIELD: &str = "seeking_talent";

pub fn parse_new_venue(form: &FormData) -> Result<NewVenue, ValidationErrors> {
    let mut errors: Vec<FormError> = Vec::new();
    let profile = parse_profile(form, SEEKING_FIELD, &mut errors);
    let address = required_text(form, "address", &mut errors);

    let venue = profile.zip(address).map(|(p, address)| NewVenue {
        name: p.name,
        city: p.city,
        state: p.state,
        address,
        phone: p.phone,
        genres: p.genres,
        image_link: p.image_link,
        facebook_link: p.facebook_link,
        website_link: p.website_link,
        seeking_talent: p.seeking,
        seeking_description: p.seeking_description,
    });

    finish(venue, errors)
}

pub fn parse_venue_patch(form: &FormData) -> Result<VenuePatch, ValidationErrors> {
    let mut errors: Vec<FormError> = Vec::new();
    let p = parse_profile_patch(form, SEEKING_FIELD, &mut errors);
    let address = if form.has("address") {
        required_text(form, "address", &mut errors)
    } else {
        None
    };

    let patch = VenuePatch {
        name: p.name,
        city: p.city,
        state: p.state,
        address,
        phone: p.phone,
        genres: p.genres,
        image_link: p.image_link,
        facebook_link: p.facebook_link,
        website_link: p.website_link,
        seeking_talent: p.seeking,
        seeking_description: p.seeking_description,
    };

    finish(Some(patch), errors)
}
