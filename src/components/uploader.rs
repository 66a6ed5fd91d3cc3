//! Upload tab of the asset picker: stage files, upload one by one.

use leptos::prelude::*;

use crate::content::types::AssetDescriptor;
use crate::host::HostHooks;
use crate::state::toasts::ToastStack;

/// A staged file awaiting upload. The browser handle lives outside the
/// signal graph; this carries only what rendering needs.
#[derive(Clone, Debug, PartialEq, Eq)]
struct StagedUpload {
    name: String,
    preview_url: String,
}

/// File staging area and per-file upload buttons.
///
/// Upload success hands the new descriptor to `on_uploaded`; failure toasts
/// an error without retry.
#[component]
pub fn Uploader(on_uploaded: Callback<AssetDescriptor>) -> impl IntoView {
    let hooks = expect_context::<HostHooks>();
    let toasts = expect_context::<RwSignal<ToastStack>>();

    let staged = RwSignal::new(Vec::<StagedUpload>::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Browser file handles, parallel to `staged` by index.
    #[cfg(feature = "hydrate")]
    let staged_files: std::rc::Rc<std::cell::RefCell<Vec<web_sys::File>>> =
        std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_files = {
        #[cfg(feature = "hydrate")]
        let staged_files = staged_files.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let Some(input) = input_ref.get_untracked() else {
                    return;
                };
                let Some(list) = input.files() else {
                    return;
                };
                for i in 0..list.length() {
                    if let Some(file) = list.item(i) {
                        let preview_url = web_sys::Url::create_object_url_with_blob(&file)
                            .ok()
                            .unwrap_or_default();
                        staged.update(|items| {
                            items.push(StagedUpload {
                                name: file.name(),
                                preview_url,
                            });
                        });
                        staged_files.borrow_mut().push(file);
                    }
                }
                input.set_value("");
            }
        }
    };

    let on_upload = {
        #[cfg(feature = "hydrate")]
        let staged_files = staged_files.clone();
        let source = hooks.asset_source.clone();
        move |index: usize| {
            let _ = &source;
            #[cfg(feature = "hydrate")]
            {
                let Some(source) = source.clone() else {
                    return;
                };
                let file = staged_files.borrow().get(index).cloned();
                let Some(file) = file else {
                    return;
                };
                let handle = crate::host::FileHandle {
                    name: file.name(),
                    file,
                };
                leptos::task::spawn_local(async move {
                    match source.upload(handle).await {
                        Ok(asset) => {
                            toasts.update(|stack| {
                                stack.success("Asset uploaded");
                            });
                            on_uploaded.run(asset);
                        }
                        Err(err) => {
                            log::error!("asset upload failed: {err}");
                            toasts.update(|stack| {
                                stack.error("Failed to upload asset");
                            });
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (index, toasts, on_uploaded);
            }
        }
    };

    view! {
        <div class="inlay-uploader">
            <div class="inlay-uploader__staged">
                {move || {
                    staged
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let on_upload = on_upload.clone();
                            view! {
                                <div class="inlay-uploader__item">
                                    <img
                                        class="inlay-uploader__thumb"
                                        src=item.preview_url.clone()
                                        alt=item.name.clone()
                                    />
                                    <button
                                        type="button"
                                        class="inlay-uploader__send"
                                        on:click=move |_| on_upload(index)
                                    >
                                        "Upload"
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="inlay-uploader__dropzone">
                <input
                    type="file"
                    class="inlay-uploader__input"
                    multiple
                    node_ref=input_ref
                    on:change=on_files
                />
                <button type="button" class="inlay-uploader__pick" on:click=on_pick>
                    "Choose files"
                </button>
            </div>
        </div>
    }
}
