use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::family_tree::{DEFAULT_FILE_PATH, FamilyTree};

/// Default Home Page. `?file=<path>` points the tree at another document.
#[component]
pub fn Home() -> impl IntoView {
	let query = use_query_map();
	let file_path = Signal::derive(move || {
		query
			.with(|params| params.get("file"))
			.filter(|path| !path.is_empty())
			.unwrap_or_else(|| DEFAULT_FILE_PATH.to_string())
	});

	view! {
		<div class="family-tree-page">
			<FamilyTree file_path=file_path />
		</div>
	}
}
