//=========================================================================
// Platform Integration
//
// Winit glue for hosts that drive the tour from a Winit event loop.
//
// Architecture:
// ```text
//  Host (main thread):
//  ┌──────────────────────────────┐
//  │  Winit Event Loop            │
//  │   ↓ WindowEvent              │
//  │  InputTranslator             │
//  │   ├─ Converts Winit keys     │
//  │   └─ Tracks modifiers        │
//  │   ↓ InputEvent               │
//  │  ModeStack::handle_event     │
//  │   ↓                          │
//  │  RedrawRequested             │
//  │   → update(elapsed), draw()  │
//  └──────────────────────────────┘
// ```
//
// The window, the event loop and frame timing stay with the host. This
// module only translates what the host receives.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_translator;

//=== Public API ==========================================================

pub use input_translator::InputTranslator;
