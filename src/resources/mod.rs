//! Resource bindings, one module per remote collection.
//!
//! A binding borrows the [`Client`] and exposes one async method per endpoint. Methods build
//! a query or a JSON body from a serde struct (the struct's renames are the wire field
//! names) and return the service's JSON unchanged:
//!
//! ```no_run
//! use follow_up_boss::resources::tasks::NewTask;
//! use follow_up_boss::Client;
//!
//! # async fn example() -> Result<(), follow_up_boss::Error> {
//! let client = Client::from_env()?;
//! let task = client
//!     .tasks()
//!     .create(&NewTask {
//!         name: "Call back".into(),
//!         person_id: Some(17),
//!         assigned_to: Some(3),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("Task {}", task["id"]);
//! # Ok(())
//! # }
//! ```
//!
//! Every struct carries an `extra` map that is flattened into the request, for wire fields
//! the struct does not name.

use crate::{Client, Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

pub mod action_plans;
pub mod appointment_outcomes;
pub mod appointment_types;
pub mod appointments;
pub mod calls;
pub mod custom_fields;
pub mod deal_attachments;
pub mod deal_custom_fields;
pub mod deals;
pub mod email_marketing;
pub mod email_templates;
pub mod events;
pub mod groups;
pub mod identity;
pub mod inbox_apps;
pub mod notes;
pub mod people;
pub mod people_relationships;
pub mod person_attachments;
pub mod pipelines;
pub mod ponds;
pub mod reactions;
pub mod smart_lists;
pub mod stages;
pub mod tasks;
pub mod team_inboxes;
pub mod teams;
pub mod text_message_templates;
pub mod text_messages;
pub mod threaded_replies;
pub mod timeframes;
pub mod users;
pub mod webhook_events;
pub mod webhooks;

/// Wire fields passed through verbatim.
pub type Extra = Map<String, Value>;

/// Query for single-record reads that accept a `fields` projection.
#[derive(Serialize)]
pub(crate) struct Fields<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<&'a str>,
}

/// Rejects a `dropdown` field definition without options.
pub(crate) fn require_dropdown_options(field_type: &str, options: Option<&[String]>) -> Result<()> {
    if field_type.eq_ignore_ascii_case("dropdown") && options.map_or(true, <[String]>::is_empty) {
        return Err(Error::Validation(
            "'options' is required when the custom field type is 'dropdown'".to_string(),
        ));
    }
    Ok(())
}

/// Serializes an optional id as a JSON string.
pub(crate) fn id_as_string<S>(id: &Option<u64>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match id {
        Some(id) => serializer.serialize_str(&id.to_string()),
        None => serializer.serialize_none(),
    }
}

/// Serializes a flattened [`Extra`] map without its null entries.
pub(crate) fn skip_nulls<S>(extra: &Extra, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_map(extra.iter().filter(|(_, value)| !value.is_null()))
}

/// Rejects an update that would send an empty body.
pub(crate) fn require_fields<T: Serialize + ?Sized>(update: &T, what: &str) -> Result<()> {
    let body = serde_json::to_value(update).map_err(|e| Error::SerializationFailed(e.to_string()))?;
    match body {
        Value::Object(map) if !map.is_empty() => Ok(()),
        _ => Err(Error::Validation(format!(
            "At least one field must be provided to update {what}"
        ))),
    }
}

macro_rules! accessors {
    ($($(#[$doc:meta])* $method:ident => $module:ident::$ty:ident;)*) => {
        impl Client {
            $(
                $(#[$doc])*
                pub fn $method(&self) -> $module::$ty<'_> {
                    $module::$ty::new(self)
                }
            )*
        }
    };
}

accessors! {
    /// `actionPlans` and `actionPlansPeople`
    action_plans => action_plans::ActionPlans;
    /// `appointmentOutcomes`
    appointment_outcomes => appointment_outcomes::AppointmentOutcomes;
    /// `appointmentTypes`
    appointment_types => appointment_types::AppointmentTypes;
    /// `appointments`
    appointments => appointments::Appointments;
    /// `calls`
    calls => calls::Calls;
    /// `customFields`
    custom_fields => custom_fields::CustomFields;
    /// `dealAttachments`
    deal_attachments => deal_attachments::DealAttachments;
    /// `dealCustomFields`
    deal_custom_fields => deal_custom_fields::DealCustomFields;
    /// `deals`
    deals => deals::Deals;
    /// `emEvents` and `emCampaigns`
    email_marketing => email_marketing::EmailMarketing;
    /// `templates`
    email_templates => email_templates::EmailTemplates;
    /// `events`
    events => events::Events;
    /// `groups`
    groups => groups::Groups;
    /// `identity` and `me`
    identity => identity::Identity;
    /// `inboxApps`
    inbox_apps => inbox_apps::InboxApps;
    /// `notes`
    notes => notes::Notes;
    /// `people`
    people => people::People;
    /// `peopleRelationships`
    people_relationships => people_relationships::PeopleRelationships;
    /// `personAttachments`
    person_attachments => person_attachments::PersonAttachments;
    /// `pipelines`
    pipelines => pipelines::Pipelines;
    /// `ponds`
    ponds => ponds::Ponds;
    /// `reactions`
    reactions => reactions::Reactions;
    /// `smartLists`
    smart_lists => smart_lists::SmartLists;
    /// `stages`
    stages => stages::Stages;
    /// `tasks`
    tasks => tasks::Tasks;
    /// `teamInboxes`
    team_inboxes => team_inboxes::TeamInboxes;
    /// `teams`
    teams => teams::Teams;
    /// `textMessageTemplates`
    text_message_templates => text_message_templates::TextMessageTemplates;
    /// `textMessages`
    text_messages => text_messages::TextMessages;
    /// `threadedReplies`
    threaded_replies => threaded_replies::ThreadedReplies;
    /// `timeframes`
    timeframes => timeframes::Timeframes;
    /// `users`
    users => users::Users;
    /// `webhookEvents`
    webhook_events => webhook_events::WebhookEvents;
    /// `webhooks`
    webhooks => webhooks::Webhooks;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dropdown_requires_options() {
        assert!(require_dropdown_options("text", None).is_ok());
        assert!(require_dropdown_options("dropdown", Some(&["A".to_string()])).is_ok());
        assert!(matches!(
            require_dropdown_options("Dropdown", None),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            require_dropdown_options("DROPDOWN", Some(&[])),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_require_fields() {
        assert!(require_fields(&json!({"description": "x"}), "attachment").is_ok());
        let err = require_fields(&json!({}), "attachment").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: At least one field must be provided to update attachment"
        );
    }

    #[test]
    fn test_null_extras_are_left_out_of_bodies() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
            #[serde(flatten, serialize_with = "skip_nulls")]
            extra: Extra,
        }

        let mut extra = Extra::new();
        extra.insert("stage".into(), Value::Null);
        extra.insert("price".into(), json!(450000));
        let body = Body { name: "Deal", extra };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"name": "Deal", "price": 450000})
        );
    }
}
