use yew::prelude::*;

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    html! {
        <div class="animated-background">
            <style>
                {r#"
                .animated-background {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 100%;
                    background: linear-gradient(to bottom right, #1e3a8a, #581c87);
                    overflow: hidden;
                    z-index: 0;
                }
                .animated-background .grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(255, 255, 255, 0.1) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(255, 255, 255, 0.1) 1px, transparent 1px);
                    background-size: 40px 40px;
                }
                .animated-background .dot {
                    position: absolute;
                    border-radius: 50%;
                    background: white;
                    opacity: 0.3;
                    animation: float 6s ease-in-out infinite;
                }
                .animated-background .swirl {
                    position: absolute;
                    top: 30%;
                    left: 45%;
                    width: 120px;
                    height: 120px;
                    border: 2px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50% 0;
                    animation: spin 10s linear infinite, pulse 4s ease-in-out infinite;
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-20px); }
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                @keyframes pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }
                "#}
            </style>
            <div class="grid"></div>
            <span class="dot" style="left: 10%; top: 10%; width: 10px; height: 10px;"></span>
            <span class="dot" style="left: 90%; top: 10%; width: 6px; height: 6px; animation-delay: 1s;"></span>
            <span class="dot" style="left: 50%; top: 50%; width: 14px; height: 14px; animation-delay: 2s;"></span>
            <span class="dot" style="left: 20%; top: 80%; width: 8px; height: 8px; animation-delay: 3s;"></span>
            <span class="dot" style="left: 80%; top: 80%; width: 12px; height: 12px; animation-delay: 4s;"></span>
            <div class="swirl"></div>
        </div>
    }
}
