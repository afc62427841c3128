//! Interaction payload builders
//!
//! JSON bodies shaped like what Discord POSTs to the interactions endpoint,
//! reduced to the fields the bot reads.

use serde_json::{json, Value};

/// A type-1 liveness ping
#[must_use]
pub fn ping() -> Value {
    json!({ "type": 1 })
}

/// An interaction with an unrecognized type discriminant
#[must_use]
pub fn unknown_type() -> Value {
    json!({ "type": 99 })
}

/// A bare application command with no options, invoked by `user_id`
#[must_use]
pub fn command(name: &str, user_id: &str, username: &str) -> Value {
    json!({
        "type": 2,
        "data": { "name": name },
        "member": {
            "user": { "id": user_id, "username": username },
            "roles": []
        }
    })
}

/// `/register [ign]`
#[must_use]
pub fn register(user_id: &str, username: &str, ign: &str) -> Value {
    json!({
        "type": 2,
        "data": {
            "name": "register",
            "options": [{ "name": "ign", "value": ign }]
        },
        "member": {
            "user": { "id": user_id, "username": username },
            "roles": []
        }
    })
}

/// `/whois @target` asked by an arbitrary caller
#[must_use]
pub fn whois(target_id: &str) -> Value {
    json!({
        "type": 2,
        "data": {
            "name": "whois",
            "options": [{ "name": "user", "value": target_id }]
        },
        "member": {
            "user": { "id": "caller", "username": "caller" },
            "roles": []
        }
    })
}

/// `/whois @target` with resolved role data for the target
#[must_use]
pub fn whois_with_roles(target_id: &str, roles: &[&str]) -> Value {
    json!({
        "type": 2,
        "data": {
            "name": "whois",
            "options": [{ "name": "user", "value": target_id }],
            "resolved": {
                "members": { target_id: { "roles": roles } }
            }
        },
        "member": {
            "user": { "id": "caller", "username": "caller" },
            "roles": []
        }
    })
}

/// `/needcarry [boss] [notes?]`
#[must_use]
pub fn needcarry(user_id: &str, username: &str, boss: &str, notes: Option<&str>) -> Value {
    let mut options = vec![json!({ "name": "boss", "value": boss })];
    if let Some(notes) = notes {
        options.push(json!({ "name": "notes", "value": notes }));
    }
    json!({
        "type": 2,
        "data": { "name": "needcarry", "options": options },
        "member": {
            "user": { "id": user_id, "username": username },
            "roles": []
        }
    })
}

/// `/guildlist`
#[must_use]
pub fn guildlist() -> Value {
    command("guildlist", "caller", "caller")
}
