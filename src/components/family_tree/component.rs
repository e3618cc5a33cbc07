use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use log::debug;

use super::loader::fetch_family_tree;
use super::render::{FEMALE, MALE, Palette, RenderedNode, Toggle, UNKNOWN, render_tree};
use super::state::{ExpansionSet, LoadGeneration, LoadStatus};
use super::types::{DEFAULT_FILE_PATH, NodePath, default_expanded};

#[component]
pub fn FamilyTree(
	#[prop(into, default = Signal::stored(DEFAULT_FILE_PATH.to_string()))]
	file_path: Signal<String>,
	#[prop(default = default_expanded())] initially_expanded: Vec<String>,
	#[prop(into, default = "Maroju Family Tree".to_string())] title: String,
) -> impl IntoView {
	let (status, set_status) = signal(LoadStatus::Loading);
	let expansion = RwSignal::new(ExpansionSet::default());
	let seeds = StoredValue::new(initially_expanded);

	let generation = Rc::new(LoadGeneration::default());

	Effect::new(move |_| {
		let path = file_path.get();
		let ticket = generation.begin();
		let generation = generation.clone();
		set_status.set(LoadStatus::Loading);
		spawn_local(async move {
			let result = fetch_family_tree(&path).await;
			// A newer request started while this one was in flight.
			if !generation.is_current(ticket) {
				debug!("Dropping stale response for {path}");
				return;
			}
			if let Ok(Some(root)) = &result {
				let seeded =
					seeds.try_with_value(|names| ExpansionSet::from_names(root, names.as_slice()));
				if let Some(set) = seeded {
					debug!("Expanding {} nodes from seed names", set.len());
					let _ = expansion.try_set(set);
				}
			}
			let _ = set_status.try_set(LoadStatus::from(result));
		});
	});

	let on_toggle = Callback::new(move |path: NodePath| {
		expansion.update(|set| {
			let expanded = set.toggle(&path);
			debug!("Node {:?} expanded: {expanded}", path.indices());
		});
	});

	move || match status.get() {
		LoadStatus::Loading => view! {
			<div class="family-tree-loading">"Loading family tree data..."</div>
		}
		.into_any(),
		LoadStatus::Error(message) => view! {
			<div class="family-tree-error">
				<h2>"Error Loading Data"</h2>
				<p>{message}</p>
			</div>
		}
		.into_any(),
		LoadStatus::Ready(None) => view! {
			<div class="family-tree-empty">
				<h2>"No Data Available"</h2>
				<p>"Unable to load family tree data. Please check if the file exists."</p>
			</div>
		}
		.into_any(),
		LoadStatus::Ready(Some(root)) => view! {
			<div class="family-tree">
				<h1>{title.clone()}</h1>
				<Legend />
				<div class="family-tree-body">
					{move || expansion.with(|set| node_view(render_tree(&root, set), on_toggle))}
				</div>
			</div>
		}
		.into_any(),
	}
}

#[component]
fn Legend() -> impl IntoView {
	let entry = |palette: Palette, text: &'static str| {
		view! {
			<p class="family-tree-legend-entry">
				<span
					class="family-tree-swatch"
					style=format!(
						"display: inline-block; width: 0.75rem; height: 0.75rem; margin-right: 0.5rem; background-color: {}; border: 1px solid {};",
						palette.background,
						palette.border,
					)
				/>
				{text}
			</p>
		}
	};

	view! {
		<div class="family-tree-legend">
			{entry(MALE, "Male members are shown in blue")}
			{entry(FEMALE, "Female members are shown in pink")}
			{entry(UNKNOWN, "Members with unrecorded sex are shown in gray")}
		</div>
	}
}

fn node_view(node: RenderedNode, on_toggle: Callback<NodePath>) -> AnyView {
	let RenderedNode {
		path,
		depth,
		name,
		spouse,
		other_info,
		palette,
		toggle,
		children,
	} = node;

	let control = (toggle != Toggle::Leaf).then(|| {
		view! {
			<button
				class="family-tree-toggle"
				aria-expanded=(toggle == Toggle::Expanded).to_string()
				on:click=move |_| on_toggle.run(path.clone())
			>
				{toggle.glyph()}
			</button>
		}
	});

	view! {
		<div class="family-tree-node">
			<div class="family-tree-row" style=palette.row_style(depth)>
				{control}
				<span class="family-tree-icon">"👤"</span>
				<div class="family-tree-label">
					<span class="family-tree-name">{name}</span>
					{spouse.map(|spouse| view! { <span class="family-tree-spouse">"♥ " {spouse}</span> })}
					{other_info.map(|info| view! { <div class="family-tree-info">{info}</div> })}
				</div>
			</div>
			{(!children.is_empty())
				.then(|| {
					view! {
						<div class="family-tree-children">
							{children
								.into_iter()
								.map(|child| node_view(child, on_toggle))
								.collect_view()}
						</div>
					}
				})}
		</div>
	}
	.into_any()
}
