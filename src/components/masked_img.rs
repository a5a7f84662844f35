use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MaskedImgProps {
    /// The photo to show.
    pub src: AttrValue,
    /// Alpha texture that shapes the photo's silhouette.
    pub texture: AttrValue,
    /// 1.0 fills the frame, smaller values shrink the mask toward center.
    #[prop_or(1.0)]
    pub mask_scale: f64,
    #[prop_or(16.0 / 9.0)]
    pub aspect_ratio: f64,
    /// Distinguishes the generated SVG mask ids when several masked images
    /// are on the page at once.
    pub mask_id: AttrValue,
}

/// Renders an image clipped through the alpha channel of a texture image,
/// used for the organically-shaped photos between sections.
#[function_component(MaskedImg)]
pub fn masked_img(props: &MaskedImgProps) -> Html {
    let width = 1600.0;
    let height = (width / props.aspect_ratio).round();
    let mask_width = width * props.mask_scale;
    let mask_height = height * props.mask_scale;
    let mask_x = (width - mask_width) / 2.0;
    let mask_y = (height - mask_height) / 2.0;

    let mask_ref = format!("url(#{})", props.mask_id);
    let filter_id = format!("{}-whitefilter", props.mask_id);
    let filter_ref = format!("url(#{filter_id})");

    html! {
        <svg
            width="100%"
            height="100%"
            viewBox={format!("0 0 {width} {height}")}
            class="masked-img"
            style="display: block; border-radius: 1rem;"
            preserveAspectRatio="xMidYMid slice"
        >
            <defs>
                <mask id={props.mask_id.clone()} maskUnits="userSpaceOnUse">
                    <g filter={filter_ref}>
                        <image
                            href={props.texture.clone()}
                            x={mask_x.to_string()}
                            y={mask_y.to_string()}
                            width={mask_width.to_string()}
                            height={mask_height.to_string()}
                            preserveAspectRatio="none"
                        />
                    </g>
                </mask>
                <filter id={filter_id}>
                    <feFlood flood-color="white" />
                    <feComposite in2="SourceAlpha" operator="in" />
                </filter>
            </defs>
            <image
                href={props.src.clone()}
                width={width.to_string()}
                height={height.to_string()}
                preserveAspectRatio="xMidYMid slice"
                mask={mask_ref}
            />
        </svg>
    }
}
