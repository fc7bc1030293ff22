//! JNI bindings for Android.
//!
//! These functions are called from Kotlin via the JNI bridge.

use jni::objects::{JClass, JString};
use jni::sys::{jfloat, jstring};
use jni::JNIEnv;

use crate::{click_json, note_locations_json};

fn optional_string(env: &mut JNIEnv, value: &JString) -> Option<String> {
    if value.is_null() {
        None
    } else {
        env.get_string(value).ok().map(|s| s.into())
    }
}

fn to_jstring(env: &mut JNIEnv, result: crate::Result<String>) -> jstring {
    match result {
        Ok(json) => match env.new_string(&json) {
            Ok(js) => js.into_raw(),
            Err(_) => std::ptr::null_mut(),
        },
        Err(_) => std::ptr::null_mut(),
    }
}

/// Resolve note locations for a fretboard configuration.
///
/// Called from Kotlin as:
///   external fun noteLocations(config: String?, note: String, strings: String?): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_noteLocations(
    mut env: JNIEnv,
    _class: JClass,
    config: JString,
    note: JString,
    strings: JString,
) -> jstring {
    let note: String = match env.get_string(&note) {
        Ok(s) => s.into(),
        Err(_) => return std::ptr::null_mut(),
    };
    let config = optional_string(&mut env, &config);
    let strings = optional_string(&mut env, &strings);

    let result = note_locations_json(config.as_deref().unwrap_or("{}"), &note, strings.as_deref());
    to_jstring(&mut env, result)
}

/// Hit-test a click in canvas coordinates.
///
/// Called from Kotlin as:
///   external fun click(config: String?, x: Float, y: Float): String?
#[no_mangle]
pub extern "system" fn Java_com_fretlib_app_FretLib_click(
    mut env: JNIEnv,
    _class: JClass,
    config: JString,
    x: jfloat,
    y: jfloat,
) -> jstring {
    let config = optional_string(&mut env, &config);

    let result = click_json(config.as_deref().unwrap_or("{}"), x as f64, y as f64);
    to_jstring(&mut env, result)
}
