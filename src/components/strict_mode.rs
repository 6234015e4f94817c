use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct StrictModeProps {
    #[prop_or_default]
    pub children: Html,
}

/// Development diagnostics around the application tree.
///
/// With `Config::STRICT_DIAGNOSTICS` set, logs mount, unmount and every
/// re-render of the wrapped tree to the console so that unexpected render
/// loops or remounts show up while developing. Otherwise renders its children
/// untouched.
#[function_component(StrictMode)]
pub fn strict_mode(props: &StrictModeProps) -> Html {
    let renders = use_mut_ref(|| 0u32);

    // Runs after every render
    {
        let renders = renders.clone();
        use_effect(move || {
            if Config::STRICT_DIAGNOSTICS {
                let count = {
                    let mut count = renders.borrow_mut();
                    *count += 1;
                    *count
                };
                if count > 1 {
                    gloo::console::debug!(format!("[strict] tree re-rendered (render #{count})"));
                }
            }
        });
    }

    use_effect_with((), |_| {
        if Config::STRICT_DIAGNOSTICS {
            gloo::console::debug!("[strict] tree mounted");
        }
        || {
            if Config::STRICT_DIAGNOSTICS {
                gloo::console::debug!("[strict] tree unmounted");
            }
        }
    });

    props.children.clone()
}
