//! HTML rendering
//!
//! Turns the view model of a poll cycle into HTML fragments for the page
//! regions, and the page itself into a document. Templates are Handlebars,
//! so every interpolated value is HTML-escaped.

use anyhow::{Context, Result};
use dashboard_core::Render;
use handlebars::Handlebars;
use serde::Serialize;

use crate::page::Page;

const STATUS_TEMPLATE: &str = r#"<dl class="dl-horizontal">
<dt>Nr. of workers</dt><dd>{{summary.nr_of_workers}}</dd>
<dt title="{{summary.tasks_tooltip}}">Nr. of tasks</dt><dd>{{summary.nr_of_tasks}}</dd>
<dt>Server</dt><dd><a href="{{summary.server.href}}">{{summary.server.text}}</a></dd>
{{#if summary.idle_workers}}<dt title="{{summary.idle_tooltip}}">Old workers</dt><dd>{{#each summary.idle_workers}}<span class="idle-worker-name" title="{{id}}">{{nickname}}</span>{{/each}}</dd>
{{/if}}</dl>"#;

const WORKERS_TEMPLATE: &str = r#"{{#each rows}}<tr id="{{id}}" class="{{#each classes}}{{this}}{{#unless @last}} {{/unless}}{{/each}}">
<td>{{nickname}}</td>
<td>{{id}}</td>
<td>{{address}}</td>
<td class="{{status_class}}">{{status}}</td>
<td>{{software}}</td>
<td>{{#if task.href}}<a href="{{task.href}}">{{task.text}}</a>{{else}}-none-{{/if}}</td>
<td title="{{last_activity.title}}">{{last_activity.text}}</td>
</tr>
{{/each}}"#;

const ERROR_TEMPLATE: &str = r#"<p class="error">{{message}}</p>"#;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta http-equiv="refresh" content="{{refresh_secs}}">
<title>Manager Dashboard</title>
</head>
<body>
<h1>Manager Dashboard <small id="managerversion">{{version}}</small></h1>
<section id="status">{{{status}}}</section>
<table class="table">
<thead><tr><th>Nickname</th><th>ID</th><th>Address</th><th>Status</th><th>Software</th><th>Current task</th><th>Last activity</th></tr></thead>
<tbody id="workers">{{{workers}}}</tbody>
</table>
{{#if kick.visible}}<a id="downloadkick" class="btn" href="/kick">{{kick.label}}</a>{{/if}}
</body>
</html>
"#;

/// New contents for the page regions after one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionUpdate {
    /// Successful poll: every region is replaced
    Dashboard {
        version: String,
        status: String,
        workers: String,
    },
    /// Failed poll: only the status region is replaced
    Failure { status: String },
}

/// Handlebars-backed renderer for the dashboard page
#[derive(Debug)]
pub struct Renderer {
    handlebars: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars
            .register_template_string("status", STATUS_TEMPLATE)
            .context("Invalid status template")?;
        handlebars
            .register_template_string("workers", WORKERS_TEMPLATE)
            .context("Invalid workers template")?;
        handlebars
            .register_template_string("error", ERROR_TEMPLATE)
            .context("Invalid error template")?;
        handlebars
            .register_template_string("page", PAGE_TEMPLATE)
            .context("Invalid page template")?;

        Ok(Self { handlebars })
    }

    /// Renders the region fragments for a cycle's decision
    pub fn render(&self, render: &Render) -> Result<RegionUpdate> {
        match render {
            Render::Dashboard(view) => Ok(RegionUpdate::Dashboard {
                version: view.manager_version.clone(),
                status: self.template("status", view)?,
                workers: self.template("workers", view)?,
            }),
            Render::Failure(error) => Ok(RegionUpdate::Failure {
                status: self.template("error", error)?,
            }),
        }
    }

    /// Renders the full HTML document for the current page state
    pub fn document(&self, page: &Page) -> Result<String> {
        self.template("page", page)
    }

    fn template<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        self.handlebars
            .render(name, data)
            .with_context(|| format!("Failed to render {} template", name))
    }
}
